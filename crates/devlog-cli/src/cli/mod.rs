use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `devlog` binary.
#[derive(Debug, Parser)]
#[command(name = "devlog", version, about = "devlog - daily logs and team reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `[database] path`)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{DeveloperCommands, LogCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "devlog",
            "--format",
            "table",
            "--verbose",
            "developer",
            "list",
            "--manager",
            "dev-m1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Developer {
                action: DeveloperCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "devlog", "log", "team", "--manager", "dev-m1", "--format", "raw", "--quiet",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Log {
                action: LogCommands::Team { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["devlog", "--format", "xml", "developer", "list", "--manager", "m"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_format_is_positional_and_unvalidated() {
        let cli = Cli::try_parse_from([
            "devlog", "report", "xlsx", "--manager", "dev-m1", "--start", "2024-01-01", "--end",
            "2024-01-07",
        ])
        .expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.kind.as_deref(), Some("xlsx"));
        assert!(args.out.is_none());
    }

    #[test]
    fn repeated_time_entries_are_collected() {
        let cli = Cli::try_parse_from([
            "devlog", "log", "add", "--developer", "dev-1", "--date", "2024-01-03", "--tasks",
            "<p>x</p>", "--time", "t1:2h30m", "--time", "t2:0h45m", "--mood", "GOOD",
        ])
        .expect("cli should parse");
        let Commands::Log {
            action: LogCommands::Add { time, .. },
        } = cli.command
        else {
            panic!("expected log add");
        };
        assert_eq!(time, vec!["t1:2h30m".to_string(), "t2:0h45m".to_string()]);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["devlog", "--db", "/tmp/devlog.db", "developer", "list", "--manager", "m"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/devlog.db"));
    }
}
