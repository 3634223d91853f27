//! Dashboard error types.

use thiserror::Error;

/// Dashboard operation result type.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors raised while updating controls from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// No control answers to this name.
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// The value is not a whole number.
    #[error("Invalid value for {control}: '{value}' is not a whole number")]
    InvalidValue {
        /// Control being updated.
        control: String,
        /// Rejected text.
        value: String,
    },
}
