mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProcessCommands;
use crate::context::AppContext;

/// Handle `tally process`.
pub fn handle(action: &ProcessCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProcessCommands::List { search, limit } => list::run(search.as_deref(), *limit, ctx, flags),
        ProcessCommands::Show { number } => show::run(number, ctx, flags),
    }
}
