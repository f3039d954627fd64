use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tally` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Tally - inspection productivity tracker"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (overrides store.data_dir)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            limit: self.limit,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{InspectionCommands, ProcessCommands, ProfileCommands};
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tally",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "activities",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Activities));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tally", "activities", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn defaults_are_table_and_auto_color() {
        let cli = Cli::try_parse_from(["tally", "activities"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tally", "--format", "xml", "activities"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn inspection_add_collects_repeated_activities() {
        let cli = Cli::try_parse_from([
            "tally",
            "inspection",
            "add",
            "--date",
            "2024-03-04",
            "--process",
            "2024/0101",
            "--activity",
            "Auto de Infração=2",
            "--activity",
            "Interdição=1",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Inspection {
                action:
                    InspectionCommands::Add {
                        date,
                        process,
                        activity,
                    },
            } => {
                assert_eq!(date, "2024-03-04");
                assert_eq!(process, "2024/0101");
                assert_eq!(activity, ["Auto de Infração=2", "Interdição=1"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn inspection_update_rejects_clear_with_activities() {
        let parsed = Cli::try_parse_from([
            "tally",
            "inspection",
            "update",
            "ins-1",
            "--activity",
            "A=1",
            "--clear-activities",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_parses_bounds_chart_and_export() {
        // A missing bound is reported by the report itself, not by clap.
        assert!(Cli::try_parse_from(["tally", "report", "--from", "2024-03-01"]).is_ok());
        let cli = Cli::try_parse_from([
            "tally",
            "report",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-31",
            "--chart",
            "quantity",
            "--export",
            "-",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.to.as_deref(), Some("2024-03-31"));
                assert_eq!(args.chart.as_deref(), Some("quantity"));
                assert_eq!(args.export.as_deref(), Some("-"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn process_and_profile_subcommands_parse() {
        let cli = Cli::try_parse_from(["tally", "process", "list", "--search", "2024"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Process {
                action: ProcessCommands::List { .. }
            }
        ));

        let cli = Cli::try_parse_from([
            "tally",
            "profile",
            "set",
            "--full-name",
            "Maria Souza",
            "--registration",
            "12345",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Profile {
                action: ProfileCommands::Set(_)
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tally", "--data-dir", "/tmp/demo", "activities"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/demo"));
    }
}
