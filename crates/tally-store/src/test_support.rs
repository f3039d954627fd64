//! Shared test utilities for tally-store unit tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use tally_core::catalog::ActivityCatalog;
    use tally_core::entities::{Activity, Inspection, InspectionActivityEntry};

    use crate::memory::MemoryStore;
    use crate::service::TallyService;

    pub fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    pub fn entries(list: &[(&str, u32)]) -> Vec<InspectionActivityEntry> {
        list.iter()
            .map(|(name, quantity)| InspectionActivityEntry::new(*name, *quantity))
            .collect()
    }

    pub fn inspection(id: &str, date: NaiveDate, process: &str, list: &[(&str, u32)]) -> Inspection {
        Inspection {
            id: id.to_string(),
            date,
            process_number: process.to_string(),
            activities: entries(list),
        }
    }

    /// Catalog `{A: 10, B: 5}`.
    pub fn small_catalog() -> ActivityCatalog {
        ActivityCatalog::from_activities(vec![Activity::new("A", 10), Activity::new("B", 5)])
            .unwrap()
    }

    /// In-memory service over the small catalog, seeded with `inspections`.
    pub fn test_service(inspections: Vec<Inspection>) -> TallyService<MemoryStore> {
        TallyService::new(MemoryStore::with_inspections(inspections), small_catalog())
    }
}
