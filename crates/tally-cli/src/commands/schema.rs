use tally_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `tally schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.type_name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;

    // A schema is a JSON document; a key/value table of it is not useful.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(schema, format)
}
