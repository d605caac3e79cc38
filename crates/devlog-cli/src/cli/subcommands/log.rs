use clap::Subcommand;

/// Daily log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Submit a daily log.
    Add {
        #[arg(long)]
        developer: String,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        tasks: String,
        /// Time entry as `task:HhMm`, repeatable
        #[arg(long)]
        time: Vec<String>,
        /// GREAT, GOOD, NEUTRAL, NOT_GREAT or BAD
        #[arg(long)]
        mood: String,
        #[arg(long)]
        blockers: Option<String>,
    },
    /// Review a log as its owner's manager.
    Review {
        id: String,
        #[arg(long)]
        manager: String,
        /// Mark the log pending again instead of reviewed
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Logs of a manager's direct reports, newest first.
    Team {
        #[arg(long)]
        manager: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        developer: Option<String>,
        /// Only logs with blocker text
        #[arg(long)]
        has_blockers: bool,
    },
}
