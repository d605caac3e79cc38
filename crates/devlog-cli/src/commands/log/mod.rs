mod add;
mod review;
mod team;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;

/// Handle `devlog log`.
pub async fn handle(action: &LogCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LogCommands::Add {
            developer,
            date,
            tasks,
            time,
            mood,
            blockers,
        } => {
            add::run(
                developer,
                date,
                tasks,
                time,
                mood,
                blockers.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        LogCommands::Review {
            id,
            manager,
            pending,
            comment,
        } => review::run(id, manager, !pending, comment.as_deref(), ctx, flags).await,
        LogCommands::Team {
            manager,
            date,
            developer,
            has_blockers,
        } => {
            team::run(
                manager,
                date.as_deref(),
                developer.as_deref(),
                *has_blockers,
                ctx,
                flags,
            )
            .await
        }
    }
}
