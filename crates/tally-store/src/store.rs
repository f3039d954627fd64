//! Storage seams.
//!
//! Both stores have whole-document semantics: the caller loads everything,
//! changes what it needs, and saves everything back.

use tally_core::entities::{Inspection, UserProfile};

use crate::error::StoreError;

/// Persistence for the inspection collection.
pub trait InspectionStore {
    /// Load every stored inspection, in stored order. An absent collection
    /// loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection exists but cannot be read.
    fn load_all(&self) -> Result<Vec<Inspection>, StoreError>;

    /// Replace the stored collection with `inspections`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written.
    fn save_all(&self, inspections: &[Inspection]) -> Result<(), StoreError>;
}

/// Persistence for the single inspector profile.
pub trait ProfileStore {
    /// Load the profile, or the all-empty default if none was saved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a saved profile cannot be read.
    fn load_profile(&self) -> Result<UserProfile, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the profile cannot be written.
    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;
}
