use std::path::PathBuf;

use anyhow::Context;
use devlog_core::responses::ReportWrittenResponse;
use devlog_report::ReportOrchestrator;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `devlog report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let start = parse_date(&args.start, "start")?;
    let end = parse_date(&args.end, "end")?;
    let kind = args
        .kind
        .clone()
        .unwrap_or_else(|| ctx.config.general.default_format.as_str().to_string());

    let orchestrator = ReportOrchestrator::new(&ctx.db, ctx.config.report.clone());
    let artifact = orchestrator
        .generate(&args.manager, start, end, &kind)
        .await
        .context("report generation failed")?;

    let path = args
        .out
        .as_ref()
        .map_or_else(|| PathBuf::from(&artifact.filename), PathBuf::from);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    output(
        &ReportWrittenResponse {
            manager_id: args.manager.clone(),
            start_date: start,
            end_date: end,
            format: artifact.format,
            content_type: artifact.content_type.to_string(),
            filename: artifact.filename.clone(),
            path: path.display().to_string(),
            bytes: artifact.bytes.len(),
        },
        flags.format,
    )
}
