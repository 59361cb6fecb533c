//! Projection engine: monthly simulation loop, outputs and IRR diagnostics

mod engine;
pub mod irr;
mod results;
mod state;

pub use engine::{simulate, ProjectionEngine};
pub use results::{ComparisonResult, ProjectionResult, YearlySnapshot};
pub use state::ProjectionState;
