//! Entity structs for all Tally domain objects.
//!
//! Wire names are camelCase so stored collections keep the shape the data
//! has always had (`activityName`, `processNumber`). All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod activity;
mod inspection;
mod profile;

pub use activity::{Activity, InspectionActivityEntry};
pub use inspection::{Inspection, InspectionDraft};
pub use profile::UserProfile;
