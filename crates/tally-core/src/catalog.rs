//! The activity catalog: a read-only name → points table.
//!
//! The built-in table is a sample so the tool works out of the box; the
//! table an office actually scores against is loaded from the TOML file
//! named by `catalog.path`. Once built a catalog is never mutated.

use std::collections::HashMap;

use crate::entities::Activity;
use crate::errors::CoreError;

/// Points lookup by activity name.
///
/// This is the only view of the catalog the report aggregator needs.
pub trait PointsLookup {
    /// Points for `name`, or `None` if the activity is not catalogued.
    fn lookup_points(&self, name: &str) -> Option<u32>;
}

/// Placeholder activities as `(name, points)`.
///
/// These names and point values are illustrative, not an official scoring
/// table. Point `catalog.path` at a `[[activities]]` TOML file to use the
/// real one.
const BUILTIN_ACTIVITIES: &[(&str, u32)] = &[
    ("Vistoria de Obra", 8),
    ("Vistoria de Habite-se", 12),
    ("Vistoria de Denúncia", 7),
    ("Vistoria de Área de Risco", 10),
    ("Notificação Preliminar", 5),
    ("Auto de Infração", 10),
    ("Auto de Embargo", 15),
    ("Interdição", 20),
    ("Acompanhamento de Demolição", 25),
    ("Análise de Processo", 6),
    ("Informação Técnica", 4),
    ("Diligência Externa", 3),
    ("Atendimento ao Público", 2),
];

/// Immutable activity table, preserving catalog order for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
    points: HashMap<String, u32>,
}

impl ActivityCatalog {
    /// Build a catalog from a list of activities.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on a blank name, a zero point value,
    /// or a duplicated name.
    pub fn from_activities(activities: Vec<Activity>) -> Result<Self, CoreError> {
        let mut points = HashMap::with_capacity(activities.len());
        for activity in &activities {
            if activity.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "catalog activity name must not be blank".to_string(),
                ));
            }
            if activity.points == 0 {
                return Err(CoreError::Validation(format!(
                    "catalog activity '{}' must be worth at least 1 point",
                    activity.name
                )));
            }
            if points
                .insert(activity.name.clone(), activity.points)
                .is_some()
            {
                return Err(CoreError::Validation(format!(
                    "catalog activity '{}' is defined more than once",
                    activity.name
                )));
            }
        }
        Ok(Self { activities, points })
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let activities: Vec<Activity> = BUILTIN_ACTIVITIES
            .iter()
            .map(|(name, points)| Activity::new(*name, *points))
            .collect();
        let points = activities
            .iter()
            .map(|activity| (activity.name.clone(), activity.points))
            .collect();
        Self { activities, points }
    }

    /// Activities in catalog order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PointsLookup for ActivityCatalog {
    fn lookup_points(&self, name: &str) -> Option<u32> {
        self.points.get(name).copied()
    }
}

impl PointsLookup for HashMap<String, u32> {
    fn lookup_points(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = ActivityCatalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_ACTIVITIES.len());
        let rebuilt = ActivityCatalog::from_activities(catalog.activities().to_vec())
            .expect("builtin catalog should pass validation");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn lookup_returns_points_or_none() {
        let catalog = ActivityCatalog::builtin();
        assert_eq!(catalog.lookup_points("Auto de Infração"), Some(10));
        assert!(catalog.contains("Interdição"));
        assert_eq!(catalog.lookup_points("Vistoria Antiga"), None);
    }

    #[test]
    fn preserves_catalog_order() {
        let catalog = ActivityCatalog::from_activities(vec![
            Activity::new("Zeta", 1),
            Activity::new("Alfa", 2),
        ])
        .unwrap();
        let names: Vec<&str> = catalog
            .activities()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Zeta", "Alfa"]);
    }

    #[test]
    fn rejects_duplicates_and_zero_points() {
        let dup = ActivityCatalog::from_activities(vec![
            Activity::new("A", 1),
            Activity::new("A", 2),
        ]);
        assert!(dup.unwrap_err().to_string().contains("more than once"));

        let zero = ActivityCatalog::from_activities(vec![Activity::new("A", 0)]);
        assert!(zero.unwrap_err().to_string().contains("at least 1 point"));

        let blank = ActivityCatalog::from_activities(vec![Activity::new("  ", 3)]);
        assert!(blank.is_err());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = ActivityCatalog::from_activities(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
