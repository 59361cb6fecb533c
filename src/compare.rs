//! Comparison runner for evaluating all asset kinds under shared parameters
//!
//! Validates a parameter set once, then projects it for every asset kind (and
//! optionally every scenario) without revalidating.

use rayon::prelude::*;

use crate::error::SimulationError;
use crate::params::{AssetKind, Parameters, Scenario};
use crate::projection::{ComparisonResult, ProjectionEngine};

/// Pre-validated runner producing three-asset comparisons
///
/// # Example
/// ```ignore
/// let runner = ComparisonRunner::new(params)?;
/// let results = runner.run();
/// println!("{}", results.best_market_asset().asset.label());
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    engine: ProjectionEngine,
}

impl ComparisonRunner {
    /// Create a runner with a validated parameter set
    pub fn new(params: Parameters) -> Result<Self, SimulationError> {
        Ok(Self {
            engine: ProjectionEngine::new(params)?,
        })
    }

    /// The parameter set this runner compares
    pub fn params(&self) -> &Parameters {
        self.engine.params()
    }

    /// Project the parameter set for all three asset kinds
    pub fn run(&self) -> ComparisonResult {
        ComparisonResult {
            income_property: self.engine.project(AssetKind::IncomeProperty),
            equity_index: self.engine.project(AssetKind::EquityIndex),
            risk_free_savings: self.engine.project(AssetKind::RiskFreeSavings),
        }
    }

    /// Run the comparison under each of the three scenarios
    ///
    /// Returns `(scenario, results)` pairs in optimism order; all other
    /// parameters are held fixed.
    pub fn run_scenarios(&self) -> Vec<(Scenario, ComparisonResult)> {
        Scenario::ALL
            .iter()
            .map(|&scenario| {
                let runner = Self {
                    engine: self.engine.with_scenario(scenario),
                };
                (scenario, runner.run())
            })
            .collect()
    }

    /// Run comparisons for many parameter sets in parallel
    ///
    /// Each set is validated before any work starts; one invalid set fails
    /// the whole batch. Results keep the input order.
    pub fn run_batch(param_sets: &[Parameters]) -> Result<Vec<ComparisonResult>, SimulationError> {
        let runners = param_sets
            .iter()
            .map(|params| Self::new(params.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("running {} comparison(s) in parallel", runners.len());

        Ok(runners.par_iter().map(|runner| runner.run()).collect())
    }
}
