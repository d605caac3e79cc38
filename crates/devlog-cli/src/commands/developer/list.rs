use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(manager: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let developers = ctx.db.list_developers(manager).await?;
    output(&developers, flags.format)
}
