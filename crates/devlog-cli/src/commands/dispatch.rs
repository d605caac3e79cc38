use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Developer { action } => commands::developer::handle(&action, ctx, flags).await,
        Commands::Log { action } => commands::log::handle(&action, ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
    }
}
