//! Aggregator output consumed by presentation sinks.

use schemars::JsonSchema;
use serde::Serialize;
use tally_core::interval::DateInterval;

/// One activity's aggregated quantity and point total within the interval.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub activity_name: String,
    pub quantity: u64,
    pub total_points: u64,
}

/// Rows in activity-name order, their grand total, and the interval that
/// produced them.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub interval: DateInterval,
    pub rows: Vec<ReportRow>,
    pub grand_total_points: u64,
    /// Names found in inspections but not in the catalog. They contributed
    /// quantity but zero points.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_activities: Vec<String>,
}

impl ReportResult {
    /// A result with no rows for `interval`.
    #[must_use]
    pub const fn empty(interval: DateInterval) -> Self {
        Self {
            interval,
            rows: Vec::new(),
            grand_total_points: 0,
            unknown_activities: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `activity_name`, if it appeared in the interval.
    #[must_use]
    pub fn row(&self, activity_name: &str) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|row| row.activity_name == activity_name)
    }

    /// Sum of quantities across all rows.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.rows.iter().map(|row| row.quantity).sum()
    }
}
