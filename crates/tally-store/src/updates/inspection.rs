//! Inspection update builder.

use chrono::NaiveDate;
use serde::Serialize;
use tally_core::entities::{Inspection, InspectionActivityEntry};

/// Fields to change on an existing inspection. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InspectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_number: Option<String>,
    /// Replaces the whole activity list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<InspectionActivityEntry>>,
}

impl InspectionUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none() && self.process_number.is_none() && self.activities.is_none()
    }

    /// Apply the set fields to `inspection`. The id never changes.
    pub fn apply_to(self, inspection: &mut Inspection) {
        if let Some(date) = self.date {
            inspection.date = date;
        }
        if let Some(process_number) = self.process_number {
            inspection.process_number = process_number.trim().to_string();
        }
        if let Some(activities) = self.activities {
            inspection.activities = activities;
        }
    }
}

pub struct InspectionUpdateBuilder(InspectionUpdate);

impl InspectionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(InspectionUpdate::default())
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn process_number(mut self, process_number: impl Into<String>) -> Self {
        self.0.process_number = Some(process_number.into());
        self
    }

    #[must_use]
    pub fn activities(mut self, activities: Vec<InspectionActivityEntry>) -> Self {
        self.0.activities = Some(activities);
        self
    }

    #[must_use]
    pub fn build(self) -> InspectionUpdate {
        self.0
    }
}

impl Default for InspectionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
