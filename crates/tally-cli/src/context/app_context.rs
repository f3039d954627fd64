use std::path::PathBuf;

use anyhow::Context;
use tally_config::TallyConfig;
use tally_store::{FileStore, TallyService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TallyService<FileStore>,
    pub config: TallyConfig,
}

impl AppContext {
    /// Resolve the data directory and catalog, and open the file store.
    ///
    /// `data_dir_override` (from `--data-dir`) wins over `store.data_dir`.
    pub fn init(config: TallyConfig, data_dir_override: Option<&str>) -> anyhow::Result<Self> {
        let data_dir = match data_dir_override {
            Some(dir) => PathBuf::from(dir),
            None => config
                .store
                .resolve_data_dir()
                .context("failed to resolve data directory")?,
        };

        let catalog = config
            .catalog
            .load()
            .context("failed to load activity catalog")?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            activities = catalog.len(),
            "initialized application context"
        );

        Ok(Self {
            service: TallyService::new(FileStore::new(data_dir), catalog),
            config,
        })
    }
}
