//! Load parameter sets from CSV for batch comparisons

use csv::Reader;
use std::error::Error;
use std::path::Path;

use super::{Parameters, Scenario};

/// Raw CSV row matching the parameter-set column layout
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InitialAmount")]
    initial_amount: f64,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: f64,
    #[serde(rename = "DurationYears")]
    duration_years: u32,
    #[serde(rename = "ScpiRate")]
    scpi_rate: f64,
    #[serde(rename = "EtfRate")]
    etf_rate: f64,
    #[serde(rename = "ManagementFees")]
    management_fees: f64,
    #[serde(rename = "EntryFees")]
    entry_fees: f64,
    #[serde(rename = "TaxRate")]
    tax_rate: f64,
    #[serde(rename = "SocialTaxRate")]
    social_tax_rate: f64,
    #[serde(rename = "ReinvestDividends")]
    reinvest_dividends: bool,
    #[serde(rename = "InflationRate")]
    inflation_rate: f64,
    #[serde(rename = "Scenario")]
    scenario: String,
}

impl CsvRow {
    fn to_parameters(self) -> Result<Parameters, Box<dyn Error>> {
        let scenario = match self.scenario.as_str() {
            "optimistic" => Scenario::Optimistic,
            "neutral" => Scenario::Neutral,
            "pessimistic" => Scenario::Pessimistic,
            other => return Err(format!("Unknown Scenario: {}", other).into()),
        };

        Ok(Parameters {
            initial_amount: self.initial_amount,
            monthly_payment: self.monthly_payment,
            duration_years: self.duration_years,
            scpi_annual_rate_pct: self.scpi_rate,
            etf_annual_rate_pct: self.etf_rate,
            management_fee_annual_pct: self.management_fees,
            entry_fee_pct: self.entry_fees,
            income_tax_rate_pct: self.tax_rate,
            social_tax_rate_pct: self.social_tax_rate,
            reinvest_dividends: self.reinvest_dividends,
            inflation_rate_pct: self.inflation_rate,
            scenario,
        })
    }
}

/// Load all parameter sets from a CSV file
pub fn load_param_sets<P: AsRef<Path>>(path: P) -> Result<Vec<Parameters>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut sets = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        sets.push(row.to_parameters()?);
    }

    Ok(sets)
}

/// Load parameter sets from any reader (e.g., string buffer, network stream)
pub fn load_param_sets_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Parameters>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut sets = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        sets.push(row.to_parameters()?);
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
InitialAmount,MonthlyPayment,DurationYears,ScpiRate,EtfRate,ManagementFees,EntryFees,TaxRate,SocialTaxRate,ReinvestDividends,InflationRate,Scenario
10000,500,10,4.5,7.0,1.5,5.0,30.0,17.2,true,2.0,neutral
50000,0,20,5.0,6.5,1.0,2.0,12.8,17.2,false,1.8,pessimistic
";

    #[test]
    fn test_load_from_reader() {
        let sets = load_param_sets_from_reader(SAMPLE.as_bytes()).expect("parse failed");
        assert_eq!(sets.len(), 2);

        let first = &sets[0];
        assert_relative_eq!(first.initial_amount, 10_000.0);
        assert_eq!(first.duration_years, 10);
        assert_eq!(first.scenario, Scenario::Neutral);
        assert!(first.reinvest_dividends);

        let second = &sets[1];
        assert_relative_eq!(second.monthly_payment, 0.0);
        assert_eq!(second.scenario, Scenario::Pessimistic);
        assert!(!second.reinvest_dividends);
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let bad = "\
InitialAmount,MonthlyPayment,DurationYears,ScpiRate,EtfRate,ManagementFees,EntryFees,TaxRate,SocialTaxRate,ReinvestDividends,InflationRate,Scenario
10000,500,10,4.5,7.0,1.5,5.0,30.0,17.2,true,2.0,euphoric
";
        assert!(load_param_sets_from_reader(bad.as_bytes()).is_err());
    }
}
