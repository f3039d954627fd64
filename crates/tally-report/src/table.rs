//! Tabular view of a report: one line per row plus a total footer.

use crate::result::ReportResult;

pub const HEADERS: [&str; 3] = ["Activity", "Quantity", "Points"];

/// String cells ready for a table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: [&'static str; 3],
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl ReportTable {
    #[must_use]
    pub fn from_result(result: &ReportResult) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.activity_name.clone(),
                    row.quantity.to_string(),
                    row.total_points.to_string(),
                ]
            })
            .collect();

        Self {
            headers: HEADERS,
            rows,
            footer: vec![
                "Total".to_string(),
                result.total_quantity().to_string(),
                result.grand_total_points.to_string(),
            ],
        }
    }
}
