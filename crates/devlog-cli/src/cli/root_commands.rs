use clap::{Args, Subcommand};

use crate::cli::subcommands::{DeveloperCommands, LogCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Developers and managers.
    Developer {
        #[command(subcommand)]
        action: DeveloperCommands,
    },
    /// Daily logs.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Generate a team report for a date range.
    Report(ReportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Report encoding: pdf or csv (defaults to `[general] default_format`)
    pub kind: Option<String>,
    /// Manager whose direct reports are included
    #[arg(long)]
    pub manager: String,
    /// First date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Last date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,
    /// Output file (defaults to the generated filename in the current directory)
    #[arg(long)]
    pub out: Option<String>,
}
