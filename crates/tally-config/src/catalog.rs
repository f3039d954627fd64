//! Activity catalog source.
//!
//! By default the built-in table is used. `catalog.path` may point at a TOML
//! file that replaces it:
//!
//! ```toml
//! [[activities]]
//! name = "Vistoria de Obra"
//! points = 8
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tally_core::catalog::ActivityCatalog;
use tally_core::entities::Activity;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a replacement catalog file. Empty means the built-in table.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    activities: Vec<Activity>,
}

impl CatalogConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Build the catalog this configuration selects.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Catalog` if it does not parse or validate.
    pub fn load(&self) -> Result<ActivityCatalog, ConfigError> {
        if !self.is_configured() {
            return Ok(ActivityCatalog::builtin());
        }
        load_catalog_file(Path::new(self.path.trim()))
    }
}

/// Parse a catalog TOML file.
///
/// # Errors
///
/// See [`CatalogConfig::load`].
pub fn load_catalog_file(path: &Path) -> Result<ActivityCatalog, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CatalogFile = toml::from_str(&raw).map_err(|error| catalog_error(path, error))?;
    if file.activities.is_empty() {
        return Err(catalog_error(path, "no [[activities]] entries"));
    }
    let catalog =
        ActivityCatalog::from_activities(file.activities).map_err(|error| catalog_error(path, error))?;
    tracing::debug!(path = %path.display(), activities = catalog.len(), "loaded activity catalog");
    Ok(catalog)
}

fn catalog_error(path: &Path, reason: impl ToString) -> ConfigError {
    ConfigError::Catalog {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}
