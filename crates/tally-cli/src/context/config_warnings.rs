use tally_config::TallyConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TallyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TallyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.store.is_configured() && has_env_prefix(&env_keys, "TALLY_STORE") {
        warnings.push(
            "Store config appears default while TALLY_STORE* env vars exist. Use double underscores (example: TALLY_STORE__DATA_DIR)."
                .to_string(),
        );
    }

    if !config.catalog.is_configured() && has_env_prefix(&env_keys, "TALLY_CATALOG") {
        warnings.push(
            "Catalog config appears default while TALLY_CATALOG* env vars exist. Use double underscores (example: TALLY_CATALOG__PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
