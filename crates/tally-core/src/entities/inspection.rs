use std::collections::HashSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::PointsLookup;
use crate::entities::InspectionActivityEntry;
use crate::errors::CoreError;

/// One user-recorded inspection: a date, a process number, and the
/// activities performed with their quantities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: String,
    pub date: NaiveDate,
    pub process_number: String,
    #[serde(default)]
    pub activities: Vec<InspectionActivityEntry>,
}

/// The user-supplied part of an inspection, before an ID is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDraft {
    pub date: NaiveDate,
    pub process_number: String,
    pub activities: Vec<InspectionActivityEntry>,
}

impl InspectionDraft {
    /// Attach an ID, trimming the process number.
    #[must_use]
    pub fn into_inspection(self, id: String) -> Inspection {
        Inspection {
            id,
            date: self.date,
            process_number: self.process_number.trim().to_string(),
            activities: self.activities,
        }
    }
}

impl Inspection {
    /// Sum of all entry quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.activities
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Check the rules applied to new inspections.
    ///
    /// Stored inspections are never re-validated on load; legacy activity
    /// names must still flow into reports.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on an empty process number, a zero
    /// quantity, an activity name absent from `catalog`, or the same
    /// activity listed twice.
    pub fn validate(&self, catalog: &impl PointsLookup) -> Result<(), CoreError> {
        self.check(catalog, &HashSet::new())
    }

    /// Check an edited copy of `previous`.
    ///
    /// Same rules as [`Inspection::validate`], except that activity names
    /// already stored on `previous` pass even when the catalog no longer
    /// lists them.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` as [`Inspection::validate`] does.
    pub fn validate_edit(
        &self,
        catalog: &impl PointsLookup,
        previous: &Self,
    ) -> Result<(), CoreError> {
        let stored: HashSet<&str> = previous
            .activities
            .iter()
            .map(|entry| entry.activity_name.as_str())
            .collect();
        self.check(catalog, &stored)
    }

    fn check(&self, catalog: &impl PointsLookup, stored: &HashSet<&str>) -> Result<(), CoreError> {
        if self.process_number.trim().is_empty() {
            return Err(CoreError::Validation(
                "process number is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.activities {
            let name = entry.activity_name.as_str();
            if entry.quantity == 0 {
                return Err(CoreError::Validation(format!(
                    "quantity for '{name}' must be at least 1"
                )));
            }
            if catalog.lookup_points(name).is_none() && !stored.contains(name) {
                return Err(CoreError::Validation(format!("unknown activity '{name}'")));
            }
            if !seen.insert(name) {
                return Err(CoreError::Validation(format!(
                    "activity '{name}' listed more than once"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActivityCatalog;
    use crate::entities::Activity;

    fn catalog() -> ActivityCatalog {
        ActivityCatalog::from_activities(vec![Activity::new("A", 10), Activity::new("B", 5)])
            .unwrap()
    }

    fn inspection(process: &str, activities: Vec<InspectionActivityEntry>) -> Inspection {
        Inspection {
            id: "ins-00000001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            process_number: process.to_string(),
            activities,
        }
    }

    #[test]
    fn accepts_valid_inspection() {
        let insp = inspection(
            "PMC.2024.00012",
            vec![
                InspectionActivityEntry::new("A", 2),
                InspectionActivityEntry::new("B", 1),
            ],
        );
        assert!(insp.validate(&catalog()).is_ok());
        assert_eq!(insp.total_quantity(), 3);
    }

    #[test]
    fn accepts_inspection_without_activities() {
        assert!(inspection("123", vec![]).validate(&catalog()).is_ok());
    }

    #[test]
    fn rejects_blank_process_number() {
        let err = inspection("   ", vec![]).validate(&catalog()).unwrap_err();
        assert!(err.to_string().contains("process number is required"));
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = inspection("1", vec![InspectionActivityEntry::new("A", 0)])
            .validate(&catalog())
            .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn rejects_unknown_activity() {
        let err = inspection("1", vec![InspectionActivityEntry::new("Z", 1)])
            .validate(&catalog())
            .unwrap_err();
        assert!(err.to_string().contains("unknown activity 'Z'"));
    }

    #[test]
    fn rejects_duplicate_activity() {
        let err = inspection(
            "1",
            vec![
                InspectionActivityEntry::new("A", 1),
                InspectionActivityEntry::new("A", 2),
            ],
        )
        .validate(&catalog())
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn edit_keeps_stored_names_missing_from_catalog() {
        let stored = inspection("1", vec![InspectionActivityEntry::new("Retired", 2)]);
        let mut edited = stored.clone();
        edited.process_number = "2".to_string();
        assert!(edited.validate_edit(&catalog(), &stored).is_ok());

        edited.activities.push(InspectionActivityEntry::new("Z", 1));
        let err = edited.validate_edit(&catalog(), &stored).unwrap_err();
        assert!(err.to_string().contains("unknown activity 'Z'"));

        edited.activities = vec![InspectionActivityEntry::new("Retired", 0)];
        assert!(edited.validate_edit(&catalog(), &stored).is_err());
    }

    #[test]
    fn deserializes_stored_shape() {
        let json = r#"{"id":"5f0c","date":"2024-03-05","processNumber":"77","activities":[{"activityName":"A","quantity":1}]}"#;
        let insp: Inspection = serde_json::from_str(json).unwrap();
        assert_eq!(insp.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(insp.activities[0].activity_name, "A");
    }

    #[test]
    fn draft_trims_process_number() {
        let draft = InspectionDraft {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            process_number: "  42 ".to_string(),
            activities: vec![],
        };
        let insp = draft.into_inspection("ins-1".to_string());
        assert_eq!(insp.process_number, "42");
        assert_eq!(insp.id, "ins-1");
    }
}
