//! Local data directory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding `inspections.jsonl` and `profile.json`.
    /// Empty means the platform data directory (`~/.local/share/tally` on Linux).
    #[serde(default)]
    pub data_dir: String,
}

impl StoreConfig {
    /// Whether an explicit data directory is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.data_dir.trim().is_empty()
    }

    /// The data directory to use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if no directory is configured and
    /// the platform has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("tally"))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "store.data_dir".to_string(),
                reason: "no platform data directory; set store.data_dir".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StoreConfig {
            data_dir: " /tmp/tally-data ".to_string(),
        };
        assert!(config.is_configured());
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/tally-data")
        );
    }

    #[test]
    fn default_is_unconfigured() {
        assert!(!StoreConfig::default().is_configured());
    }
}
