//! Report error types.

use tally_core::errors::IntervalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The interval was incomplete or reversed; nothing was computed. The
    /// cause is reported as the error's source.
    #[error("Cannot generate report")]
    InvalidInterval(#[from] IntervalError),

    /// Export needs the inspector's name and registration number.
    #[error("Cannot export report: profile is missing {0}")]
    IncompleteProfile(&'static str),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn chain(err: &dyn Error) -> String {
        let mut parts = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            parts.push(cause.to_string());
            source = cause.source();
        }
        parts.join(": ")
    }

    #[test]
    fn interval_cause_appears_once_in_chain() {
        let err = ReportError::from(IntervalError::Reversed {
            start: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        });
        assert_eq!(
            chain(&err),
            "Cannot generate report: Invalid interval: start 2024-03-31 is after end 2024-03-01"
        );
    }
}
