//! # tally-store
//!
//! Local persistence and the service layer for Tally.
//!
//! Inspections are kept as one JSON object per line in
//! `<data_dir>/inspections.jsonl`, and the inspector profile as
//! `<data_dir>/profile.json`. Both are loaded and saved wholesale; saves go
//! through a temp file in the same directory that is renamed over the target.
//!
//! [`TallyService`] wires a store and an activity catalog and carries every
//! user-facing operation (recording, editing, browsing, reporting).

pub mod error;
pub mod file;
pub mod memory;
pub mod repos;
pub mod service;
pub mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use service::TallyService;
pub use store::{InspectionStore, ProfileStore};
pub use updates::inspection::{InspectionUpdate, InspectionUpdateBuilder};
