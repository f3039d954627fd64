use clap::{Args, Subcommand};

use crate::cli::subcommands::{InspectionCommands, ProcessCommands, ProfileCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the activity catalog with point values.
    Activities,
    /// Record, edit, and look up inspections.
    Inspection {
        #[command(subcommand)]
        action: InspectionCommands,
    },
    /// Browse inspections by process number.
    Process {
        #[command(subcommand)]
        action: ProcessCommands,
    },
    /// Productivity report for a date interval.
    Report(ReportArgs),
    /// Inspector profile used on exported reports.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Print the JSON Schema of a stored or produced type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// First day of the interval (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub from: Option<String>,
    /// Last day of the interval (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub to: Option<String>,
    /// Also draw a bar chart of: points, quantity
    #[arg(long)]
    pub chart: Option<String>,
    /// Write the report document to PATH (a directory gets the default
    /// file name; `-` prints it).
    #[arg(long, value_name = "PATH")]
    pub export: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name (e.g. inspection, report_result). Omit to list names.
    pub type_name: Option<String>,
}
