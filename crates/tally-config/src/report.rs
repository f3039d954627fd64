//! Report export and chart configuration.

use serde::{Deserialize, Serialize};

fn default_header_lines() -> Vec<String> {
    vec![
        "Prefeitura Municipal de Campinas".to_string(),
        "Secretaria Municipal de Urbanismo".to_string(),
        "Departamento de Controle Urbano".to_string(),
    ]
}

fn default_title() -> String {
    "Monthly Inspection Productivity Report".to_string()
}

const fn default_effective_percentage() -> u8 {
    85
}

fn default_signature_label() -> String {
    "Coordinator signature".to_string()
}

const fn default_chart_width() -> usize {
    40
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Organisation lines printed centred at the top of exported reports.
    #[serde(default = "default_header_lines")]
    pub header_lines: Vec<String>,

    #[serde(default = "default_title")]
    pub title: String,

    /// Printed below the total as the month's effective percentage.
    #[serde(default = "default_effective_percentage")]
    pub effective_percentage: u8,

    #[serde(default = "default_signature_label")]
    pub signature_label: String,

    /// Width in cells of the longest chart bar.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header_lines: default_header_lines(),
            title: default_title(),
            effective_percentage: default_effective_percentage(),
            signature_label: default_signature_label(),
            chart_width: default_chart_width(),
        }
    }
}
