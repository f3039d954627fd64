//! Schema registry errors.

use thiserror::Error;

/// Errors from looking up or checking against a registered schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered as '{0}'")]
    UnknownSchema(String),

    /// A JSON value broke one or more rules of `schema`. `record` names the
    /// stored record it came from, when there is one.
    #[error(
        "{} does not match the {schema} schema: {}",
        .record.as_deref().unwrap_or("value"),
        .violations.join("; ")
    )]
    Mismatch {
        schema: String,
        record: Option<String>,
        violations: Vec<String>,
    },

    #[error("schema '{schema}' does not compile: {reason}")]
    Compile { schema: String, reason: String },
}

impl SchemaError {
    /// Attach the label of the stored record a mismatch was found in.
    #[must_use]
    pub fn for_record(self, label: impl Into<String>) -> Self {
        match self {
            Self::Mismatch {
                schema, violations, ..
            } => Self::Mismatch {
                schema,
                record: Some(label.into()),
                violations,
            },
            other => other,
        }
    }

    /// Individual validator messages; empty for non-mismatch errors.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Mismatch { violations, .. } => violations,
            _ => &[],
        }
    }
}
