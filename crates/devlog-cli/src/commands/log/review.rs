use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    manager: &str,
    is_reviewed: bool,
    comment: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let log = ctx
        .db
        .review_log(manager, id, is_reviewed, comment)
        .await
        .with_context(|| format!("failed to review log {id}"))?;
    output(&log, flags.format)
}
