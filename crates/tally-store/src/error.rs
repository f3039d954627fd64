//! Store error types for tally-store.

use std::path::PathBuf;

use tally_core::errors::CoreError;
use tally_report::ReportError;
use thiserror::Error;

/// Errors from loading, saving, or operating on stored data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored record could not be decoded. Saving over it would lose data,
    /// so this is never skipped.
    #[error("Corrupt record #{record} in {}: {reason}", path.display())]
    Corrupt {
        path: PathBuf,
        record: usize,
        reason: String,
    },

    /// JSON encoding or decoding of a whole document failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation or lookup failure from the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A report could not be produced.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }

    /// Whether this error is a missing-entity lookup.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
