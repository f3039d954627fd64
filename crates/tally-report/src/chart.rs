//! Horizontal text bar chart of a report.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::result::{ReportResult, ReportRow};

const BAR: char = '█';

/// Which column the bars measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    Points,
    Quantity,
}

impl ChartMetric {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Points => "Points per activity",
            Self::Quantity => "Quantity per activity",
        }
    }

    const fn value(self, row: &ReportRow) -> u64 {
        match self {
            Self::Points => row.total_points,
            Self::Quantity => row.quantity,
        }
    }
}

/// Render one bar per row, the longest bar `width` cells wide.
///
/// Non-zero values always get at least one cell so they stay visible next
/// to zero-valued rows.
#[must_use]
pub fn render_bar_chart(result: &ReportResult, metric: ChartMetric, width: usize) -> String {
    let mut out = String::new();
    out.push_str(metric.title());

    if result.rows.is_empty() {
        out.push_str("\n(no rows)");
        return out;
    }

    let label_width = result
        .rows
        .iter()
        .map(|row| row.activity_name.chars().count())
        .max()
        .unwrap_or(0);
    let max = result
        .rows
        .iter()
        .map(|row| metric.value(row))
        .max()
        .unwrap_or(0);
    let width = width.max(1);

    for row in &result.rows {
        let value = metric.value(row);
        let cells = bar_cells(value, max, width);
        let _ = write!(
            out,
            "\n{:<label_width$}  {}{} {value}",
            row.activity_name,
            BAR.to_string().repeat(cells),
            " ".repeat(width - cells),
        );
    }
    out
}

fn bar_cells(value: u64, max: u64, width: usize) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
    let scaled = (u128::from(value) * u128::from(width_u64) + u128::from(max) / 2) / u128::from(max);
    usize::try_from(scaled).unwrap_or(width).clamp(1, width)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tally_core::interval::DateInterval;

    use super::*;

    fn result(rows: &[(&str, u64, u64)]) -> ReportResult {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let rows: Vec<ReportRow> = rows
            .iter()
            .map(|(name, quantity, points)| ReportRow {
                activity_name: (*name).to_string(),
                quantity: *quantity,
                total_points: *points,
            })
            .collect();
        let grand_total_points = rows.iter().map(|r| r.total_points).sum();
        ReportResult {
            interval: DateInterval::single_day(day),
            rows,
            grand_total_points,
            unknown_activities: Vec::new(),
        }
    }

    fn bar_len(line: &str) -> usize {
        line.chars().filter(|c| *c == BAR).count()
    }

    #[test]
    fn longest_bar_fills_width() {
        let chart = render_bar_chart(&result(&[("A", 3, 30), ("B", 3, 15)]), ChartMetric::Points, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Points per activity");
        assert_eq!(bar_len(lines[1]), 20);
        assert_eq!(bar_len(lines[2]), 10);
        assert!(lines[1].ends_with(" 30"));
    }

    #[test]
    fn quantity_metric_uses_quantities() {
        let chart = render_bar_chart(&result(&[("A", 3, 30), ("B", 6, 15)]), ChartMetric::Quantity, 12);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(bar_len(lines[1]), 6);
        assert_eq!(bar_len(lines[2]), 12);
    }

    #[test]
    fn zero_values_render_empty_bars_and_small_values_stay_visible() {
        let chart = render_bar_chart(
            &result(&[("A", 1, 1000), ("Legacy", 4, 0), ("Tiny", 1, 1)]),
            ChartMetric::Points,
            10,
        );
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(bar_len(lines[2]), 0);
        assert_eq!(bar_len(lines[3]), 1);
    }

    #[test]
    fn empty_result_says_so() {
        let chart = render_bar_chart(&result(&[]), ChartMetric::Quantity, 10);
        assert_eq!(chart, "Quantity per activity\n(no rows)");
    }
}
