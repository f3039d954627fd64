use std::path::Path;

use anyhow::Context;
use tally_config::TallyConfig;

/// Load `.env` (nearest one from the current directory upwards), then the
/// layered configuration.
pub fn load_config() -> anyhow::Result<TallyConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_nearest_dotenv(&cwd)?;
    TallyConfig::load().context("failed to load tally configuration")
}

fn load_nearest_dotenv(start: &Path) -> anyhow::Result<()> {
    let Some(env_path) = start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
    else {
        return Ok(());
    };

    dotenvy::from_path(&env_path)
        .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    tracing::debug!(path = %env_path.display(), "loaded .env");
    Ok(())
}
