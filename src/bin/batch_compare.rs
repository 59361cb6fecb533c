//! Run comparisons for a whole batch of parameter sets
//!
//! Loads parameter sets from a CSV, projects all of them in parallel and
//! writes one summary row per set and asset kind.

use anyhow::Context;
use capitalvision::params::load_param_sets;
use capitalvision::ComparisonRunner;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "param_sets.csv".to_string());
    let output = args.next().unwrap_or_else(|| "batch_output.csv".to_string());

    let start = Instant::now();
    println!("Loading parameter sets from {input}...");

    let sets = load_param_sets(&input)
        .map_err(|e| anyhow::anyhow!("loading {input}: {e}"))?;
    log::info!("loaded {} parameter sets in {:?}", sets.len(), start.elapsed());
    println!("Loaded {} parameter sets in {:?}", sets.len(), start.elapsed());

    println!("Running comparisons...");
    let run_start = Instant::now();
    let results = ComparisonRunner::run_batch(&sets)?;
    println!("Comparisons complete in {:?}", run_start.elapsed());

    let mut file = File::create(&output).with_context(|| format!("creating {output}"))?;
    writeln!(
        file,
        "Set,Asset,FinalCapital,NetFinalCapital,TotalDividends,TotalFees,TotalTax,AnnualReturnPct,NPV"
    )?;

    for (set_index, comparison) in results.iter().enumerate() {
        for projection in comparison.iter() {
            writeln!(
                file,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{:.2}",
                set_index + 1,
                projection.asset.label(),
                projection.final_capital,
                projection.net_final_capital,
                projection.total_dividends,
                projection.total_fees,
                projection.total_tax,
                projection.annual_return_pct,
                projection.net_present_value,
            )?;
        }
    }

    println!("Output written to {output}");

    // Console summary: best market asset per set
    println!("\nBatch Summary:");
    for (set_index, comparison) in results.iter().enumerate() {
        let best = comparison.best_market_asset();
        println!(
            "  Set {:>3}: best={:<8} net_final=${:.0}",
            set_index + 1,
            best.asset.label(),
            best.net_final_capital,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
