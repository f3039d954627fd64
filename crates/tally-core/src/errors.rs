//! Cross-cutting error types for Tally.
//!
//! Domain-specific errors (e.g., `StoreError`, `ReportError`) are defined in
//! their respective crates. `tally-cli` converges everything into `anyhow`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can be raised by any Tally crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required fields, quantities, catalog membership).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A report interval could not be resolved.
    #[error(transparent)]
    InvalidInterval(#[from] IntervalError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reasons a requested report interval cannot be used.
///
/// These are recoverable user-input conditions: callers report "cannot
/// generate report" and never fall back to aggregating across all time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("Invalid interval: start date is missing")]
    MissingStart,

    #[error("Invalid interval: end date is missing")]
    MissingEnd,

    #[error("Invalid interval: start {start} is after end {end}")]
    Reversed { start: NaiveDate, end: NaiveDate },
}
