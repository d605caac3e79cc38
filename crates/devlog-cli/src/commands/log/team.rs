use devlog_core::responses::TeamLogsResponse;
use devlog_report::{LogFilter, team_logs};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    manager: &str,
    date: Option<&str>,
    developer: Option<&str>,
    has_blockers: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = LogFilter {
        date: date.map(|raw| parse_date(raw, "date")).transpose()?,
        developer_id: developer.map(String::from),
        has_blockers: has_blockers.then_some(true),
        ..LogFilter::default()
    };

    let logs = team_logs(&ctx.db, manager, &filter).await?;
    output(
        &TeamLogsResponse {
            manager_id: manager.to_string(),
            count: logs.len(),
            logs,
        },
        flags.format,
    )
}
