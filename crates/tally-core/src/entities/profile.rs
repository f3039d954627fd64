use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The inspector's personal data, printed in exported report headers.
///
/// Stored as one document; every field defaults to empty so a fresh data
/// directory loads without error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: String,
    pub id_card: String,
    pub tax_id: String,
    pub registration: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl UserProfile {
    /// Whether the fields required by report export are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.registration.trim().is_empty()
    }

    /// First whitespace-separated token of the full name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.full_name.split_whitespace().next()
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the full name is shorter than two
    /// characters, the registration number is empty, or a non-empty email
    /// is malformed.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.full_name.trim().chars().count() < 2 {
            return Err(CoreError::Validation("full name is required".to_string()));
        }
        if self.registration.trim().is_empty() {
            return Err(CoreError::Validation(
                "registration number is required".to_string(),
            ));
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            return Err(CoreError::Validation(format!("invalid email '{email}'")));
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
