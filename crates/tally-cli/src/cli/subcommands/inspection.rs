use clap::Subcommand;

/// Inspection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InspectionCommands {
    /// Record a new inspection.
    Add {
        /// Inspection date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// Process number the inspection belongs to.
        #[arg(long)]
        process: String,
        /// Activity performed, as "NAME=QTY". Repeatable.
        #[arg(long, value_name = "NAME=QTY")]
        activity: Vec<String>,
    },
    /// Edit an inspection.
    Update {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        process: Option<String>,
        /// Replacement activity list, as "NAME=QTY". Repeatable.
        #[arg(long, value_name = "NAME=QTY")]
        activity: Vec<String>,
        /// Remove every activity from the inspection.
        #[arg(long, conflicts_with = "activity")]
        clear_activities: bool,
    },
    /// Get an inspection by ID.
    Get { id: String },
    /// List inspections recorded on a day.
    List {
        /// Day to list (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}
