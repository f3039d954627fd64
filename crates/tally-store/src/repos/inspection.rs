//! Inspection recording, editing, and lookup.

use chrono::NaiveDate;
use tally_core::entities::{Inspection, InspectionDraft};
use tally_core::ids::{PREFIX_INSPECTION, generate_id};

use crate::error::StoreError;
use crate::service::TallyService;
use crate::store::InspectionStore;
use crate::updates::inspection::InspectionUpdate;

const ENTITY: &str = "inspection";

impl<S: InspectionStore> TallyService<S> {
    /// Validate `draft`, give it a fresh id, and append it to the collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` with a validation error if the draft breaks
    /// an entry rule, or a store error if loading or saving fails.
    pub fn record_inspection(&self, draft: InspectionDraft) -> Result<Inspection, StoreError> {
        let mut inspections = self.store().load_all()?;

        let mut id = generate_id(PREFIX_INSPECTION)?;
        while inspections.iter().any(|existing| existing.id == id) {
            id = generate_id(PREFIX_INSPECTION)?;
        }

        let inspection = draft.into_inspection(id);
        inspection.validate(self.catalog())?;

        inspections.push(inspection.clone());
        self.store().save_all(&inspections)?;

        tracing::info!(
            id = %inspection.id,
            date = %inspection.date,
            process = %inspection.process_number,
            entries = inspection.activities.len(),
            "recorded inspection"
        );
        Ok(inspection)
    }

    /// Apply `update` to the inspection with `id`, keeping its position in
    /// the collection.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, a validation error if the
    /// edited inspection breaks an entry rule, or a store error. Activity
    /// names the inspection already carried are accepted even when the
    /// catalog has since dropped them.
    pub fn update_inspection(
        &self,
        id: &str,
        update: InspectionUpdate,
    ) -> Result<Inspection, StoreError> {
        let mut inspections = self.store().load_all()?;
        let slot = inspections
            .iter_mut()
            .find(|inspection| inspection.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        let mut edited = slot.clone();
        update.apply_to(&mut edited);
        edited.validate_edit(self.catalog(), slot)?;

        if edited == *slot {
            tracing::debug!(id, "inspection unchanged");
            return Ok(edited);
        }

        *slot = edited.clone();
        self.store().save_all(&inspections)?;
        tracing::info!(id, "updated inspection");
        Ok(edited)
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, or a store error.
    pub fn get_inspection(&self, id: &str) -> Result<Inspection, StoreError> {
        self.store()
            .load_all()?
            .into_iter()
            .find(|inspection| inspection.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Inspections recorded for `date`, in stored order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the collection cannot be loaded.
    pub fn inspections_on(&self, date: NaiveDate) -> Result<Vec<Inspection>, StoreError> {
        let mut inspections = self.store().load_all()?;
        inspections.retain(|inspection| inspection.date == date);
        Ok(inspections)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tally_core::errors::CoreError;

    use super::*;
    use crate::test_support::helpers::{entries, inspection, march, test_service};
    use crate::updates::inspection::InspectionUpdateBuilder;

    fn draft(date: NaiveDate, process: &str, list: &[(&str, u32)]) -> InspectionDraft {
        InspectionDraft {
            date,
            process_number: process.to_string(),
            activities: entries(list),
        }
    }

    fn validation_message(err: StoreError) -> String {
        match err {
            StoreError::Core(CoreError::Validation(message)) => message,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn record_assigns_id_and_appends() {
        let svc = test_service(vec![inspection("ins-00000001", march(1), "P-1", &[])]);
        let recorded = svc
            .record_inspection(draft(march(2), " P-2 ", &[("A", 2), ("B", 1)]))
            .unwrap();

        assert!(recorded.id.starts_with("ins-"));
        assert_eq!(recorded.process_number, "P-2");

        let stored = svc.store().inspections();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1], recorded);
        assert_eq!(svc.store().save_count(), 1);
    }

    #[test]
    fn record_rejects_invalid_drafts_without_saving() {
        let svc = test_service(Vec::new());

        let blank = svc.record_inspection(draft(march(2), "   ", &[("A", 1)]));
        assert_eq!(validation_message(blank.unwrap_err()), "process number is required");

        let zero = svc.record_inspection(draft(march(2), "P", &[("A", 0)]));
        assert!(validation_message(zero.unwrap_err()).contains("at least 1"));

        let unknown = svc.record_inspection(draft(march(2), "P", &[("Z", 1)]));
        assert_eq!(validation_message(unknown.unwrap_err()), "unknown activity 'Z'");

        let duplicate = svc.record_inspection(draft(march(2), "P", &[("A", 1), ("A", 2)]));
        assert!(validation_message(duplicate.unwrap_err()).contains("more than once"));

        assert_eq!(svc.store().save_count(), 0);
        assert!(svc.store().inspections().is_empty());
    }

    #[test]
    fn record_allows_no_activities() {
        let svc = test_service(Vec::new());
        let recorded = svc.record_inspection(draft(march(5), "P-5", &[])).unwrap();
        assert!(recorded.activities.is_empty());
    }

    #[test]
    fn update_replaces_in_place() {
        let svc = test_service(vec![
            inspection("ins-1", march(1), "P-1", &[("A", 1)]),
            inspection("ins-2", march(2), "P-2", &[("B", 1)]),
            inspection("ins-3", march(3), "P-3", &[]),
        ]);
        let update = InspectionUpdateBuilder::new()
            .date(march(9))
            .activities(entries(&[("A", 4)]))
            .build();

        let edited = svc.update_inspection("ins-2", update).unwrap();
        assert_eq!(edited, inspection("ins-2", march(9), "P-2", &[("A", 4)]));

        let ids: Vec<String> = svc.store().inspections().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["ins-1", "ins-2", "ins-3"]);
        assert_eq!(svc.store().inspections()[1], edited);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let svc = test_service(Vec::new());
        let err = svc
            .update_inspection("ins-missing", InspectionUpdate::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_is_validated() {
        let svc = test_service(vec![inspection("ins-1", march(1), "P-1", &[("A", 1)])]);
        let update = InspectionUpdateBuilder::new().process_number("").build();
        assert!(svc.update_inspection("ins-1", update).is_err());
        assert_eq!(svc.store().inspections()[0].process_number, "P-1");
    }

    #[test]
    fn update_keeps_legacy_activity_names() {
        let svc = test_service(vec![inspection(
            "legacy-uuid",
            march(1),
            "P-1",
            &[("Old Activity", 2)],
        )]);
        let update = InspectionUpdateBuilder::new().process_number("P-9").build();

        let edited = svc.update_inspection("legacy-uuid", update).unwrap();
        assert_eq!(edited, inspection("legacy-uuid", march(1), "P-9", &[("Old Activity", 2)]));
        assert_eq!(svc.store().save_count(), 1);

        let adds_unknown = InspectionUpdateBuilder::new()
            .activities(entries(&[("Old Activity", 2), ("Z", 1)]))
            .build();
        let err = svc.update_inspection("legacy-uuid", adds_unknown).unwrap_err();
        assert_eq!(validation_message(err), "unknown activity 'Z'");
    }

    #[test]
    fn noop_update_does_not_save() {
        let svc = test_service(vec![inspection("ins-1", march(1), "P-1", &[("A", 1)])]);
        svc.update_inspection("ins-1", InspectionUpdate::default())
            .unwrap();
        assert_eq!(svc.store().save_count(), 0);
    }

    #[test]
    fn get_and_list_by_date() {
        let svc = test_service(vec![
            inspection("ins-1", march(1), "P-1", &[]),
            inspection("ins-2", march(2), "P-2", &[]),
            inspection("ins-3", march(1), "P-3", &[]),
        ]);

        assert_eq!(svc.get_inspection("ins-2").unwrap().process_number, "P-2");
        assert!(svc.get_inspection("ins-9").unwrap_err().is_not_found());

        let on_first: Vec<String> = svc
            .inspections_on(march(1))
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(on_first, ["ins-1", "ins-3"]);
        assert!(svc.inspections_on(march(31)).unwrap().is_empty());
    }
}
