use clap::Subcommand;

/// Process number commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProcessCommands {
    /// List distinct process numbers in first-recorded order.
    List {
        /// Only numbers containing this text.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show every inspection of a process, newest first.
    Show { number: String },
}
