use chrono::Local;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional_date;
use crate::context::AppContext;
use crate::output::output;

pub fn run(date: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = parse_optional_date(date, "date")?.unwrap_or_else(|| Local::now().date_naive());
    let inspections = ctx.service.inspections_on(date)?;
    output(&inspections, flags.format)
}
