mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeveloperCommands;
use crate::context::AppContext;

/// Handle `devlog developer`.
pub async fn handle(
    action: &DeveloperCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DeveloperCommands::Add {
            first,
            last,
            email,
            role,
            manager,
        } => add::run(first, last, email, role, manager.as_deref(), ctx, flags).await,
        DeveloperCommands::List { manager } => list::run(manager, ctx, flags).await,
    }
}
