//! Browsing inspections by process number.

use std::collections::HashSet;

use tally_core::entities::Inspection;

use crate::error::StoreError;
use crate::service::TallyService;
use crate::store::InspectionStore;

impl<S: InspectionStore> TallyService<S> {
    /// Distinct process numbers in first-seen order, optionally limited to
    /// those containing `query` (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns a store error if the collection cannot be loaded.
    pub fn process_numbers(&self, query: Option<&str>) -> Result<Vec<String>, StoreError> {
        let inspections = self.store().load_all()?;
        let mut seen = HashSet::new();
        let numbers = inspections
            .into_iter()
            .map(|inspection| inspection.process_number)
            .filter(|number| seen.insert(number.clone()))
            .filter(|number| query.is_none_or(|q| number.contains(q)))
            .collect();
        Ok(numbers)
    }

    /// Every inspection for `process_number`, newest date first. Same-day
    /// inspections keep their stored order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the collection cannot be loaded.
    pub fn inspections_for_process(
        &self,
        process_number: &str,
    ) -> Result<Vec<Inspection>, StoreError> {
        let mut inspections = self.store().load_all()?;
        inspections.retain(|inspection| inspection.process_number == process_number);
        inspections.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(inspections)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::test_support::helpers::{inspection, march, test_service};

    fn seeded() -> crate::TallyService<crate::MemoryStore> {
        test_service(vec![
            inspection("ins-1", march(3), "2024/0101", &[]),
            inspection("ins-2", march(1), "2024/0202", &[]),
            inspection("ins-3", march(9), "2024/0101", &[]),
            inspection("ins-4", march(9), "2023/0999", &[]),
            inspection("ins-5", march(5), "2024/0101", &[]),
        ])
    }

    #[rstest]
    #[case::all(None, &["2024/0101", "2024/0202", "2023/0999"])]
    #[case::year(Some("2024"), &["2024/0101", "2024/0202"])]
    #[case::suffix(Some("0999"), &["2023/0999"])]
    #[case::none_match(Some("x"), &[])]
    fn process_numbers_in_first_seen_order(
        #[case] query: Option<&str>,
        #[case] expected: &[&str],
    ) {
        assert_eq!(seeded().process_numbers(query).unwrap(), expected);
    }

    #[test]
    fn process_inspections_newest_first() {
        let ids: Vec<String> = seeded()
            .inspections_for_process("2024/0101")
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["ins-3", "ins-5", "ins-1"]);
    }

    #[test]
    fn unknown_process_is_empty() {
        assert!(seeded().inspections_for_process("nope").unwrap().is_empty());
    }
}
