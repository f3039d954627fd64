use clap::{Args, Subcommand};

/// Inspector profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the saved profile.
    Show,
    /// Replace the saved profile.
    Set(ProfileSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub registration: String,
    #[arg(long)]
    pub id_card: Option<String>,
    #[arg(long)]
    pub tax_id: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
}
