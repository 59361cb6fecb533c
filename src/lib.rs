//! CapitalVision - Deterministic projection engine for long-term investment comparison
//!
//! This library provides:
//! - Month-by-month capital projections for three products: an income-property
//!   vehicle (SCPI), an equity-index tracker (ETF) and the risk-free Livret A
//!   baseline
//! - Optimistic / neutral / pessimistic scenario scaling of market rates
//! - Year-level snapshots and aggregate metrics (net capital, geometric
//!   return, simplified IRR, inflation-adjusted NPV)
//! - Three-asset comparison runs, multi-scenario sweeps and parallel batches
//! - CSV export and JSON snapshot persistence for the comparison output

pub mod compare;
pub mod error;
pub mod export;
pub mod params;
pub mod projection;

// Re-export commonly used types
pub use compare::ComparisonRunner;
pub use error::SimulationError;
pub use params::{AssetKind, Parameters, Scenario};
pub use projection::{simulate, ComparisonResult, ProjectionResult, YearlySnapshot};
