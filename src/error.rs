//! Error types for the projection engine

use thiserror::Error;

/// Errors raised when a parameter set is rejected before simulation
///
/// Validation happens up front; a projection is never partially computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Duration must be a positive number of years
    #[error("invalid parameter: duration_years must be positive")]
    NonPositiveDuration,

    /// Monetary amounts (initial capital, monthly payment) must be >= 0
    #[error("invalid parameter: {field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    /// Rate inputs (returns, fees, taxes, inflation) must be >= 0
    #[error("invalid parameter: {field} must be non-negative, got {value}")]
    NegativeRate { field: &'static str, value: f64 },

    /// A numeric input was NaN or infinite
    #[error("invalid parameter: {field} is not a finite number")]
    NonFiniteInput { field: &'static str },
}
