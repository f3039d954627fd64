//! Central schema registry for all Tally types.
//!
//! The `SchemaRegistry` builds JSON Schemas from `tally-core` and
//! `tally-report` types at construction time using [`schemars::schema_for!`]
//! and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Named JSON Schemas for every type Tally stores or emits.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Stored types ---
        register!(schemas, "inspection", tally_core::entities::Inspection);
        register!(
            schemas,
            "inspection_activity_entry",
            tally_core::entities::InspectionActivityEntry
        );
        register!(schemas, "activity", tally_core::entities::Activity);
        register!(schemas, "user_profile", tally_core::entities::UserProfile);

        // --- Report input and output ---
        register!(
            schemas,
            "interval_request",
            tally_core::interval::IntervalRequest
        );
        register!(schemas, "date_interval", tally_core::interval::DateInterval);
        register!(schemas, "report_row", tally_report::ReportRow);
        register!(schemas, "report_result", tally_report::ReportResult);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownSchema` if the schema name is unknown, or
    /// `SchemaError::Mismatch` carrying every violation found.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            reason: e.to_string(),
        })?;

        let violations: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Mismatch {
                schema: name.to_string(),
                record: None,
                violations,
            })
        }
    }

    /// [`SchemaRegistry::validate`] for a stored record, labelling any
    /// mismatch with `record`.
    ///
    /// # Errors
    ///
    /// As [`SchemaRegistry::validate`].
    pub fn validate_record(
        &self,
        name: &str,
        record: &str,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        self.validate(name, instance)
            .map_err(|e| e.for_record(record))
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
