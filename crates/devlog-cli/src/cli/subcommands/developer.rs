use clap::Subcommand;

/// Developer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeveloperCommands {
    /// Register a developer or manager.
    Add {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        email: String,
        /// developer or manager
        #[arg(long, default_value = "developer")]
        role: String,
        /// Manager this person reports to
        #[arg(long)]
        manager: Option<String>,
    },
    /// List the direct reports of a manager.
    List {
        #[arg(long)]
        manager: String,
    },
}
