//! Service layer over a store and an activity catalog.
//!
//! `TallyService` owns a store implementation and the catalog new entries are
//! checked against. The operations live in `repos/` as `impl TallyService`
//! blocks, one file per concern.

use tally_core::catalog::ActivityCatalog;

/// Every mutation follows the same protocol:
/// 1. Validate the new state against the catalog
/// 2. Load the whole collection
/// 3. Change it in memory
/// 4. Save the whole collection back
pub struct TallyService<S> {
    store: S,
    catalog: ActivityCatalog,
}

impl<S> TallyService<S> {
    #[must_use]
    pub const fn new(store: S, catalog: ActivityCatalog) -> Self {
        Self { store, catalog }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }
}
