mod add;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InspectionCommands;
use crate::context::AppContext;

/// Handle `tally inspection`.
pub fn handle(
    action: &InspectionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InspectionCommands::Add {
            date,
            process,
            activity,
        } => add::run(date, process, activity, ctx, flags),
        InspectionCommands::Update {
            id,
            date,
            process,
            activity,
            clear_activities,
        } => update::run(
            update::Params {
                id: id.clone(),
                date: date.clone(),
                process: process.clone(),
                activities: activity.clone(),
                clear_activities: *clear_activities,
            },
            ctx,
            flags,
        ),
        InspectionCommands::Get { id } => get::run(id, ctx, flags),
        InspectionCommands::List { date } => list::run(date.as_deref(), ctx, flags),
    }
}
