use clap::ValueEnum;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Aligned columns for terminals.
    Table,
    /// Single-line JSON for piping.
    Raw,
}

/// Flags shared by every subcommand, resolved once in `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    /// Database path override.
    pub db: Option<String>,
}
