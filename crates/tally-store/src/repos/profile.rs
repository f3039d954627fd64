//! Inspector profile.

use tally_core::entities::UserProfile;

use crate::error::StoreError;
use crate::service::TallyService;
use crate::store::ProfileStore;

impl<S: ProfileStore> TallyService<S> {
    /// The saved profile, or the all-empty default.
    ///
    /// # Errors
    ///
    /// Returns a store error if a saved profile cannot be read.
    pub fn profile(&self) -> Result<UserProfile, StoreError> {
        self.store().load_profile()
    }

    /// Validate and save `profile`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing full name or registration or
    /// a malformed email, or a store error.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        profile.validate()?;
        self.store().save_profile(profile)?;
        tracing::info!(registration = %profile.registration, "saved profile");
        Ok(())
    }
}
