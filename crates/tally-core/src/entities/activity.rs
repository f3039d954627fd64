use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named task type with a fixed point value. The name is the catalog key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub points: u32,
}

impl Activity {
    #[must_use]
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// One activity performed during an inspection, by catalog name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InspectionActivityEntry {
    pub activity_name: String,
    #[schemars(range(min = 1))]
    pub quantity: u32,
}

impl InspectionActivityEntry {
    #[must_use]
    pub fn new(activity_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            activity_name: activity_name.into(),
            quantity,
        }
    }
}
