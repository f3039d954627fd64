//! Inclusive calendar-day report intervals.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::IntervalError;

/// An interval as requested by the caller, with either bound possibly absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IntervalRequest {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl IntervalRequest {
    #[must_use]
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Resolve into a validated interval.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError` if either bound is missing or `from > to`.
    pub fn resolve(&self) -> Result<DateInterval, IntervalError> {
        let start = self.from.ok_or(IntervalError::MissingStart)?;
        let end = self.to.ok_or(IntervalError::MissingEnd)?;
        DateInterval::new(start, end)
    }
}

/// A validated inclusive `[start, end]` range of calendar days.
///
/// Both bounds cover the full day; there is no time component, so membership
/// is a plain date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// # Errors
    ///
    /// Returns `IntervalError::Reversed` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// A one-day interval.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
