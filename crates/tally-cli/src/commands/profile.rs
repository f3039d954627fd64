mod set;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

/// Handle `tally profile`.
pub fn handle(action: &ProfileCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => show::run(ctx, flags),
        ProfileCommands::Set(args) => set::run(args, ctx, flags),
    }
}
