//! Prefixed ID generation.
//!
//! IDs look like `ins-a3f8b2c1`: a three-letter prefix, a dash, and eight
//! lowercase hex characters drawn from OS randomness.

use std::fmt::Write;

use crate::errors::CoreError;

/// Prefix for inspection IDs.
pub const PREFIX_INSPECTION: &str = "ins";

/// Generate a prefixed random ID, e.g. `"ins-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|error| anyhow::anyhow!("failed to read OS randomness: {error}"))?;

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}
