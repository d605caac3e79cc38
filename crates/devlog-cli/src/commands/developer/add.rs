use anyhow::Context;
use devlog_core::enums::Role;
use devlog_db::repos::developer::NewDeveloper;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    first: &str,
    last: &str,
    email: &str,
    role: &str,
    manager: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(role, "role")?;
    let developer = ctx
        .db
        .create_developer(&NewDeveloper {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role,
            manager_id: manager.map(String::from),
        })
        .await
        .with_context(|| format!("failed to add developer {email}"))?;
    output(&developer, flags.format)
}
