use std::path::Path;

use anyhow::Context;
use devlog_config::DevlogConfig;
use devlog_db::LogDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: LogDb,
    pub config: DevlogConfig,
}

impl AppContext {
    /// Open the configured database, creating its directory when needed.
    pub async fn init(config: DevlogConfig) -> anyhow::Result<Self> {
        let path = config.database.path.clone();
        if !config.database.is_in_memory()
            && let Some(parent) = Path::new(&path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let db = LogDb::open_local(&path)
            .await
            .with_context(|| format!("failed to open devlog database at {path}"))?;
        Ok(Self { db, config })
    }
}
