use anyhow::Context;
use devlog_db::repos::daily_log::NewLog;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_mood, parse_time_entry};
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    developer: &str,
    date: &str,
    tasks: &str,
    time: &[String],
    mood: &str,
    blockers: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let log_date = parse_date(date, "date")?;
    let time_spent = time
        .iter()
        .map(|raw| parse_time_entry(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let log = ctx
        .db
        .create_log(&NewLog {
            developer_id: developer.to_string(),
            log_date,
            tasks: tasks.to_string(),
            time_spent,
            mood: parse_mood(mood)?,
            blockers: blockers.map(String::from),
        })
        .await
        .with_context(|| format!("failed to submit log for {developer} on {log_date}"))?;
    output(&log, flags.format)
}
