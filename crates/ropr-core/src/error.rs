//! Error types for the helpers around the risk model.
//!
//! [`compute`](crate::compute) itself has no error path.

use thiserror::Error;

/// A specialized Result type for ROPR operations.
pub type RoprResult<T> = Result<T, RoprError>;

/// Errors raised by sweeps and unit parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoprError {
    /// Sweep parameters are out of range or inconsistent.
    #[error("invalid sweep: {reason}")]
    InvalidSweep {
        /// What is wrong with the sweep.
        reason: String,
    },

    /// Unrecognized scaling unit name.
    #[error("unknown scale '{0}': use units, thousands or millions")]
    UnknownScale(String),
}

impl RoprError {
    /// Creates an invalid sweep error.
    pub fn invalid_sweep(reason: impl Into<String>) -> Self {
        Self::InvalidSweep {
            reason: reason.into(),
        }
    }
}
