use tally_store::InspectionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_activity_entries, parse_date};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub date: Option<String>,
    pub process: Option<String>,
    pub activities: Vec<String>,
    pub clear_activities: bool,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = InspectionUpdateBuilder::new();
    if let Some(date) = params.date.as_deref() {
        builder = builder.date(parse_date(date, "date")?);
    }
    if let Some(process) = params.process {
        builder = builder.process_number(process);
    }
    if params.clear_activities {
        builder = builder.activities(Vec::new());
    } else if !params.activities.is_empty() {
        builder = builder.activities(parse_activity_entries(&params.activities)?);
    }

    let inspection = ctx.service.update_inspection(&params.id, builder.build())?;
    output(&inspection, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.date.is_none()
        && params.process.is_none()
        && params.activities.is_empty()
        && !params.clear_activities
    {
        anyhow::bail!(
            "At least one of --date, --process, --activity, or --clear-activities must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, validate_update_params};

    fn params() -> Params {
        Params {
            id: String::from("ins-1"),
            date: None,
            process: None,
            activities: Vec::new(),
            clear_activities: false,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&params()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let with_date = Params {
            date: Some(String::from("2024-03-04")),
            ..params()
        };
        assert!(validate_update_params(&with_date).is_ok());

        let clearing = Params {
            clear_activities: true,
            ..params()
        };
        assert!(validate_update_params(&clearing).is_ok());
    }
}
