//! In-memory store for tests and dry runs.

use std::cell::{Cell, RefCell};

use tally_core::entities::{Inspection, UserProfile};

use crate::error::StoreError;
use crate::store::{InspectionStore, ProfileStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    inspections: RefCell<Vec<Inspection>>,
    profile: RefCell<UserProfile>,
    saves: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_inspections(inspections: Vec<Inspection>) -> Self {
        Self {
            inspections: RefCell::new(inspections),
            ..Self::default()
        }
    }

    /// Snapshot of the stored collection.
    #[must_use]
    pub fn inspections(&self) -> Vec<Inspection> {
        self.inspections.borrow().clone()
    }

    /// Number of `save_all` calls so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl InspectionStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Inspection>, StoreError> {
        Ok(self.inspections.borrow().clone())
    }

    fn save_all(&self, inspections: &[Inspection]) -> Result<(), StoreError> {
        *self.inspections.borrow_mut() = inspections.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl ProfileStore for MemoryStore {
    fn load_profile(&self) -> Result<UserProfile, StoreError> {
        Ok(self.profile.borrow().clone())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        *self.profile.borrow_mut() = profile.clone();
        Ok(())
    }
}
