//! CapitalVision CLI
//!
//! Runs the three-asset comparison for a parameter set given on the command
//! line and prints per-year tables, summary metrics and the conclusion.

use anyhow::{bail, Context};
use capitalvision::export::{self, format_currency, format_percentage};
use capitalvision::projection::irr;
use capitalvision::{AssetKind, ComparisonRunner, Parameters, Scenario};
use clap::Parser;
use std::path::PathBuf;

/// Compare SCPI, ETF and Livret A projections for one parameter set
#[derive(Debug, Parser)]
#[command(name = "capitalvision", version)]
struct Cli {
    /// Capital deposited at the start, in euros
    #[arg(long, default_value_t = 10_000.0)]
    initial_amount: f64,

    /// Contribution at the start of every month, in euros
    #[arg(long, default_value_t = 500.0)]
    monthly_payment: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    duration: u32,

    /// Nominal annual SCPI return, percent
    #[arg(long, default_value_t = 4.5)]
    scpi_rate: f64,

    /// Nominal annual ETF return, percent
    #[arg(long, default_value_t = 7.0)]
    etf_rate: f64,

    /// Annual management fee on capital, percent
    #[arg(long, default_value_t = 1.5)]
    management_fees: f64,

    /// Entry fee on every deposit, percent
    #[arg(long, default_value_t = 5.0)]
    entry_fees: f64,

    /// Income tax on distributed returns, percent
    #[arg(long, default_value_t = 30.0)]
    tax_rate: f64,

    /// Social contributions on distributed returns, percent
    #[arg(long, default_value_t = 17.2)]
    social_tax_rate: f64,

    /// Distribute dividends instead of compounding them
    #[arg(long)]
    no_reinvest: bool,

    /// Annual inflation for the real-value adjustment, percent
    #[arg(long, default_value_t = 2.0)]
    inflation_rate: f64,

    /// Scenario: optimistic, neutral or pessimistic
    #[arg(long, default_value = "neutral")]
    scenario: String,

    /// Write the year-indexed comparison CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Append a snapshot (params + results + timestamp) to this JSON store
    #[arg(long)]
    save: Option<PathBuf>,
}

impl Cli {
    fn to_params(&self) -> anyhow::Result<Parameters> {
        let scenario = match self.scenario.as_str() {
            "optimistic" => Scenario::Optimistic,
            "neutral" => Scenario::Neutral,
            "pessimistic" => Scenario::Pessimistic,
            other => bail!("unknown scenario '{other}' (expected optimistic, neutral or pessimistic)"),
        };

        Ok(Parameters {
            initial_amount: self.initial_amount,
            monthly_payment: self.monthly_payment,
            duration_years: self.duration,
            scpi_annual_rate_pct: self.scpi_rate,
            etf_annual_rate_pct: self.etf_rate,
            management_fee_annual_pct: self.management_fees,
            entry_fee_pct: self.entry_fees,
            income_tax_rate_pct: self.tax_rate,
            social_tax_rate_pct: self.social_tax_rate,
            reinvest_dividends: !self.no_reinvest,
            inflation_rate_pct: self.inflation_rate,
            scenario,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.to_params()?;

    println!("CapitalVision v0.1.0");
    println!("====================\n");
    println!(
        "Parameters: {} initial + {}/month over {} years ({:?} scenario)",
        format_currency(params.initial_amount),
        format_currency(params.monthly_payment),
        params.duration_years,
        params.scenario,
    );
    println!(
        "  SCPI {:.2}% / ETF {:.2}% / entry fees {:.2}% / management fees {:.2}%",
        params.scpi_annual_rate_pct,
        params.etf_annual_rate_pct,
        params.entry_fee_pct,
        params.management_fee_annual_pct,
    );
    println!();

    let runner = ComparisonRunner::new(params.clone())?;
    let results = runner.run();

    // Per-year capital table across the three assets
    println!(
        "{:>5} {:>14} {:>14} {:>14}",
        "Year", "SCPI", "ETF", "Livret A"
    );
    println!("{}", "-".repeat(51));
    for year in 0..params.duration_years as usize {
        println!(
            "{:>5} {:>14} {:>14} {:>14}",
            year + 1,
            format_currency(results.income_property.yearly_data[year].net_capital),
            format_currency(results.equity_index.yearly_data[year].net_capital),
            format_currency(results.risk_free_savings.yearly_data[year].net_capital),
        );
    }

    println!("\nSummary (total invested: {}):", format_currency(params.total_investment()));
    for projection in results.iter() {
        let accurate_irr = irr::schedule_irr_pct(&params, projection.net_final_capital)
            .map(format_percentage)
            .unwrap_or_else(|| "n/a".to_string());
        println!("  {:<9}", projection.asset.label());
        println!(
            "    Net final capital: {:>12}   Dividends: {:>12}   Fees: {:>12}   Tax: {:>12}",
            format_currency(projection.net_final_capital),
            format_currency(projection.total_dividends),
            format_currency(projection.total_fees),
            format_currency(projection.total_tax),
        );
        println!(
            "    Annual return: {}   IRR (two-point): {}   IRR (schedule): {}   NPV: {}",
            format_percentage(projection.annual_return_pct),
            format_percentage(projection.internal_rate_of_return_pct),
            accurate_irr,
            format_currency(projection.net_present_value),
        );
    }

    let best = results.best_market_asset();
    let other = if best.asset == AssetKind::IncomeProperty {
        &results.equity_index
    } else {
        &results.income_property
    };
    println!("\nConclusion:");
    println!("  Best investment: {}", best.asset.label());
    println!(
        "  Capital difference: {}",
        format_currency(best.net_final_capital - other.net_final_capital)
    );

    if let Some(path) = &cli.csv {
        export::export_yearly_csv(path, &results)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
        println!("\nYearly data written to: {}", path.display());
    }

    if let Some(path) = &cli.save {
        export::save_snapshot(path, &params, &results)
            .map_err(|e| anyhow::anyhow!("saving snapshot to {}: {e}", path.display()))?;
        println!("Snapshot appended to: {}", path.display());
    }

    Ok(())
}
