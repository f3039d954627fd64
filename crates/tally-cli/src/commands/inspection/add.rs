use tally_core::entities::InspectionDraft;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_activity_entries, parse_date};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    date: &str,
    process: &str,
    activities: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = InspectionDraft {
        date: parse_date(date, "date")?,
        process_number: process.to_string(),
        activities: parse_activity_entries(activities)?,
    };
    let inspection = ctx.service.record_inspection(draft)?;
    output(&inspection, flags.format)
}
