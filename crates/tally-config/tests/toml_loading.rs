//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use tally_config::TallyConfig;

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
header_lines = ["Prefeitura Municipal de Valinhos"]
title = "Relatório Mensal"
effective_percentage = 90
signature_label = "Assinatura do Coordenador"
chart_width = 30
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.report.header_lines,
            vec!["Prefeitura Municipal de Valinhos".to_string()]
        );
        assert_eq!(config.report.title, "Relatório Mensal");
        assert_eq!(config.report.effective_percentage, 90);
        assert_eq!(config.report.signature_label, "Assinatura do Coordenador");
        assert_eq!(config.report.chart_width, 30);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
effective_percentage = 70
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.report.effective_percentage, 70);
        assert_eq!(config.report.header_lines.len(), 3);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_cwd() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[store]
data_dir = "/srv/tally"

[catalog]
path = "catalog.toml"
"#,
        )?;

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.store.data_dir, "/srv/tally");
        assert_eq!(config.catalog.path, "catalog.toml");
        Ok(())
    });
}

#[test]
fn invalid_percentage_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[report]
effective_percentage = 120
"#,
        )?;

        let err = TallyConfig::load().expect_err("should reject");
        assert!(err.to_string().contains("report.effective_percentage"));
        Ok(())
    });
}
