//! The exported productivity report document.
//!
//! Layout, top to bottom: organisation header lines, title, inspector
//! identification, period, the activity table, the grand total, the
//! effective-percentage line, and a coordinator signature block.

use std::fmt::Write;

use tally_core::entities::UserProfile;

use crate::error::ReportError;
use crate::result::ReportResult;
use crate::table::ReportTable;

const DATE_FORMAT: &str = "%d/%m/%Y";
const SIGNATURE_RULE: &str = "___________________________________";

/// Static text printed around the report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub header_lines: Vec<String>,
    pub title: String,
    pub effective_percentage: u8,
    pub signature_label: String,
}

/// A report bound to the inspector it belongs to, ready to render.
#[derive(Debug)]
pub struct ReportDocument<'a> {
    layout: &'a DocumentLayout,
    profile: &'a UserProfile,
    result: &'a ReportResult,
}

impl<'a> ReportDocument<'a> {
    /// # Errors
    ///
    /// Returns `ReportError::IncompleteProfile` if the profile lacks a full
    /// name or registration number.
    pub fn new(
        layout: &'a DocumentLayout,
        profile: &'a UserProfile,
        result: &'a ReportResult,
    ) -> Result<Self, ReportError> {
        if profile.full_name.trim().is_empty() {
            return Err(ReportError::IncompleteProfile("full name"));
        }
        if profile.registration.trim().is_empty() {
            return Err(ReportError::IncompleteProfile("registration number"));
        }
        Ok(Self {
            layout,
            profile,
            result,
        })
    }

    /// Default export file name, e.g. `productivity_report_Maria.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        default_file_name(self.profile)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let width = self.content_width();
        let mut out = String::new();

        for line in &self.layout.header_lines {
            let _ = writeln!(out, "{}", center(line, width));
        }
        if !self.layout.header_lines.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", center(&self.layout.title, width));
        out.push('\n');

        let _ = writeln!(
            out,
            "{} - Registration: {}",
            self.profile.full_name.trim(),
            self.profile.registration.trim()
        );
        let _ = writeln!(
            out,
            "Period: {} to {}",
            self.result.interval.start().format(DATE_FORMAT),
            self.result.interval.end().format(DATE_FORMAT)
        );
        out.push('\n');

        out.push_str(&self.render_table());
        out.push('\n');

        let _ = writeln!(out, "Total: {}", self.result.grand_total_points);
        let _ = writeln!(
            out,
            "Effective percentage for the month: {}%",
            self.layout.effective_percentage
        );
        out.push_str("\n\n");
        let _ = writeln!(out, "{}", center(SIGNATURE_RULE, width));
        let _ = writeln!(out, "{}", center(&self.layout.signature_label, width));
        out
    }

    fn render_table(&self) -> String {
        let table = ReportTable::from_result(self.result);
        let widths = column_widths(&table);
        let mut out = String::new();

        let rule = format!(
            "+{}+{}+{}+",
            "-".repeat(widths[0] + 2),
            "-".repeat(widths[1] + 2),
            "-".repeat(widths[2] + 2)
        );
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "| {:<w0$} | {:>w1$} | {:>w2$} |",
            table.headers[0],
            table.headers[1],
            table.headers[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
        let _ = writeln!(out, "{rule}");
        for row in &table.rows {
            let _ = writeln!(
                out,
                "| {:<w0$} | {:>w1$} | {:>w2$} |",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
        }
        let _ = writeln!(out, "{rule}");
        out
    }

    fn content_width(&self) -> usize {
        let table = ReportTable::from_result(self.result);
        let widths = column_widths(&table);
        // Three columns, each padded by one space per side, plus four borders.
        let table_width = widths.iter().sum::<usize>() + 10;
        self.layout
            .header_lines
            .iter()
            .chain(std::iter::once(&self.layout.title))
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(table_width)
    }
}

/// `productivity_report_<first name>.txt`, or `productivity_report.txt`
/// when no name is set.
#[must_use]
pub fn default_file_name(profile: &UserProfile) -> String {
    profile.first_name().map_or_else(
        || "productivity_report.txt".to_string(),
        |first| format!("productivity_report_{first}.txt"),
    )
}

fn column_widths(table: &ReportTable) -> [usize; 3] {
    let mut widths = table.headers.map(|header| header.chars().count());
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{text}", " ".repeat((width - len) / 2))
}
