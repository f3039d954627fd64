use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.service.profile()?;
    if !profile.is_complete() {
        tracing::warn!("profile is incomplete; set it with `tally profile set` before exporting");
    }
    output(&profile, flags.format)
}
