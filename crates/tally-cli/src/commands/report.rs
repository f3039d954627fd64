use std::path::{Path, PathBuf};

use anyhow::Context;
use tally_config::ReportConfig;
use tally_core::interval::IntervalRequest;
use tally_report::ReportResult;
use tally_report::chart::{ChartMetric, render_bar_chart};
use tally_report::document::{DocumentLayout, ReportDocument};
use tally_report::table::ReportTable;

use crate::cli::root_commands::ReportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_enum, parse_optional_date};
use crate::context::AppContext;
use crate::output::{render, table, table_options};
use crate::ui;

/// Handle `tally report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = IntervalRequest::new(
        parse_optional_date(args.from.as_deref(), "from")?,
        parse_optional_date(args.to.as_deref(), "to")?,
    );
    let chart = args
        .chart
        .as_deref()
        .map(|raw| parse_enum::<ChartMetric>(raw, "chart"))
        .transpose()?;

    let result = ctx.service.generate_report(&request)?;
    let export = args.export.as_deref().map(ExportTarget::parse);

    if summary_on_stdout(export.as_ref()) {
        println!(
            "{}",
            render_summary(&result, chart, flags.format, chart_width(&result, ctx))?
        );
    }

    if let Some(target) = export {
        export_document(target, &result, ctx, flags)?;
    }
    Ok(())
}

fn chart_width(result: &ReportResult, ctx: &AppContext) -> usize {
    let longest_label = result
        .rows
        .iter()
        .map(|row| row.activity_name.chars().count())
        .max()
        .unwrap_or(0);
    ui::terminal().chart_width(ctx.config.report.chart_width, longest_label)
}

/// Where `--export` sends the document. `-` means stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    fn parse(raw: &str) -> Self {
        if raw == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

/// A document exported to stdout replaces the summary there.
fn summary_on_stdout(export: Option<&ExportTarget>) -> bool {
    !matches!(export, Some(ExportTarget::Stdout))
}

fn render_summary(
    result: &ReportResult,
    chart: Option<ChartMetric>,
    format: OutputFormat,
    chart_width: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = render_report_table(result);
            if let Some(metric) = chart {
                out.push_str("\n\n");
                out.push_str(&render_bar_chart(result, metric, chart_width));
            }
            Ok(out)
        }
        OutputFormat::Json | OutputFormat::Raw => {
            if chart.is_some() {
                tracing::debug!("chart is only drawn in table format");
            }
            render(result, format)
        }
    }
}

fn render_report_table(result: &ReportResult) -> String {
    let report_table = ReportTable::from_result(result);
    let period = format!(
        "Period: {} to {}",
        result.interval.start().format("%d/%m/%Y"),
        result.interval.end().format("%d/%m/%Y")
    );
    let body = table::render_table_with_footer(
        &report_table.headers,
        &report_table.rows,
        &report_table.footer,
        table_options(),
    );
    format!("{period}\n\n{body}")
}

fn export_document(
    target: ExportTarget,
    result: &ReportResult,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = ctx.service.profile()?;
    let layout = document_layout(&ctx.config.report);
    let document = ReportDocument::new(&layout, &profile, result)?;
    let rendered = document.render();

    let target = match target {
        ExportTarget::Stdout => {
            print!("{rendered}");
            return Ok(());
        }
        ExportTarget::File(path) => path,
    };

    let path = export_path(&target, &document.file_name());
    std::fs::write(&path, rendered)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported report");
    if !flags.quiet {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}

/// A directory target gets the document's default file name.
fn export_path(target: &Path, default_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(default_name)
    } else {
        target.to_path_buf()
    }
}

fn document_layout(config: &ReportConfig) -> DocumentLayout {
    DocumentLayout {
        header_lines: config.header_lines.clone(),
        title: config.title.clone(),
        effective_percentage: config.effective_percentage,
        signature_label: config.signature_label.clone(),
    }
}
