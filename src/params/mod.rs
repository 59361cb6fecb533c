//! Simulation parameters: user inputs, asset universe and CSV batch loading

mod data;
mod loader;

pub use data::{AssetKind, Parameters, Scenario, RISK_FREE_ANNUAL_RATE_PCT};
pub use loader::{load_param_sets, load_param_sets_from_reader};
