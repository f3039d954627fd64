//! Report generation over the stored collection.

use tally_core::interval::IntervalRequest;
use tally_report::ReportResult;

use crate::error::StoreError;
use crate::service::TallyService;
use crate::store::InspectionStore;

impl<S: InspectionStore> TallyService<S> {
    /// Load every inspection and aggregate the ones inside `request`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Report` if the interval is incomplete or reversed,
    /// or a store error if the collection cannot be loaded.
    pub fn generate_report(&self, request: &IntervalRequest) -> Result<ReportResult, StoreError> {
        // Fail on a bad interval before touching the store.
        request.resolve().map_err(tally_report::ReportError::from)?;
        let inspections = self.store().load_all()?;
        Ok(tally_report::generate(request, &inspections, self.catalog())?)
    }
}
