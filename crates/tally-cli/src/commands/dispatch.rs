use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Activities => commands::activities::handle(ctx, flags),
        Commands::Inspection { action } => commands::inspection::handle(action, ctx, flags),
        Commands::Process { action } => commands::process::handle(action, ctx, flags),
        Commands::Report(args) => commands::report::handle(args, ctx, flags),
        Commands::Profile { action } => commands::profile::handle(action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
