use tally_core::entities::UserProfile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileSetArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ProfileSetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = profile_from_args(args);
    ctx.service.save_profile(&profile)?;
    output(&profile, flags.format)
}

/// Build the full replacement profile. Omitted optional fields are cleared.
fn profile_from_args(args: &ProfileSetArgs) -> UserProfile {
    let field = |value: &Option<String>| value.as_deref().map(str::trim).unwrap_or_default().to_string();
    UserProfile {
        full_name: args.full_name.trim().to_string(),
        id_card: field(&args.id_card),
        tax_id: field(&args.tax_id),
        registration: args.registration.trim().to_string(),
        job_title: field(&args.job_title),
        phone: field(&args.phone),
        email: field(&args.email),
        address: field(&args.address),
        city: field(&args.city),
        state: field(&args.state),
    }
}
