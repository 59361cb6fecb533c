//! Export and persistence helpers for comparison results
//!
//! External consumers of the engine's output: the year-indexed comparison CSV
//! and the append-only JSON snapshot store, plus the display formatting the
//! reports use. None of this feeds back into the simulation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::params::Parameters;
use crate::projection::ComparisonResult;

/// Write the year-indexed comparison table as CSV
///
/// One row per projected year: net capital and dividends for the two market
/// assets.
pub fn write_yearly_csv<W: Write>(
    writer: &mut W,
    results: &ComparisonResult,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "Year,SCPI_NetCapital,ETF_NetCapital,SCPI_Dividends,ETF_Dividends"
    )?;

    let scpi = &results.income_property.yearly_data;
    let etf = &results.equity_index.yearly_data;
    for (scpi_year, etf_year) in scpi.iter().zip(etf) {
        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},{:.2}",
            scpi_year.year,
            scpi_year.net_capital,
            etf_year.net_capital,
            scpi_year.dividends,
            etf_year.dividends,
        )?;
    }

    Ok(())
}

/// Write the comparison CSV to a file
pub fn export_yearly_csv<P: AsRef<Path>>(
    path: P,
    results: &ComparisonResult,
) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    write_yearly_csv(&mut file, results)
}

/// A persisted simulation: parameters, results and when they were produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub timestamp: DateTime<Utc>,
    pub params: Parameters,
    pub results: ComparisonResult,
}

/// Append a snapshot to the JSON store at `path`
///
/// The store is a JSON array of snapshots; a missing file starts empty.
pub fn save_snapshot<P: AsRef<Path>>(
    path: P,
    params: &Parameters,
    results: &ComparisonResult,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut snapshots = if path.exists() {
        load_snapshots(path)?
    } else {
        Vec::new()
    };

    snapshots.push(SimulationSnapshot {
        timestamp: Utc::now(),
        params: params.clone(),
        results: results.clone(),
    });

    let json = serde_json::to_string_pretty(&snapshots)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load all snapshots from the JSON store at `path`
pub fn load_snapshots<P: AsRef<Path>>(path: P) -> Result<Vec<SimulationSnapshot>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Format a euro amount for display, rounded to whole euros with
/// space-grouped thousands (e.g. `12 345 €`)
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}

/// Format a percentage for display with two decimals
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonRunner;

    fn sample_results() -> (Parameters, ComparisonResult) {
        let params = Parameters {
            duration_years: 3,
            ..Default::default()
        };
        let results = ComparisonRunner::new(params.clone()).unwrap().run();
        (params, results)
    }

    #[test]
    fn test_yearly_csv_layout() {
        let (params, results) = sample_results();
        let mut buffer = Vec::new();
        write_yearly_csv(&mut buffer, &results).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), params.duration_years as usize + 1);
        assert_eq!(
            lines[0],
            "Year,SCPI_NetCapital,ETF_NetCapital,SCPI_Dividends,ETF_Dividends"
        );
        assert!(lines[1].starts_with("1,"));
        assert!(lines[3].starts_with("3,"));
    }

    #[test]
    fn test_snapshot_store_appends() {
        let (params, results) = sample_results();
        let path = std::env::temp_dir().join(format!(
            "capitalvision_snapshots_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        save_snapshot(&path, &params, &results).unwrap();
        save_snapshot(&path, &params, &results).unwrap();

        let snapshots = load_snapshots(&path).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].params, params);
        assert_eq!(snapshots[1].results, results);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format_currency(12345.6), "12 346 €");
        assert_eq!(format_currency(999.4), "999 €");
        assert_eq!(format_currency(-1500.0), "-1 500 €");
        assert_eq!(format_currency(0.0), "0 €");
        assert_eq!(format_percentage(4.567), "4.57%");
    }
}
