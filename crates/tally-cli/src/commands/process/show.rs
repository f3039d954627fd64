use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(number: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inspections = ctx.service.inspections_for_process(number)?;
    if inspections.is_empty() {
        tracing::info!(process = number, "no inspections recorded for process");
    }
    output(&inspections, flags.format)
}
