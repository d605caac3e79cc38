use devlog_config::DevlogConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DevlogConfig> {
    let mut config = DevlogConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut DevlogConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path, "database path overridden by --db");
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn db_flag_overrides_configured_path() {
        let mut config = DevlogConfig::default();
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: Some(":memory:".into()),
        };
        apply_overrides(&mut config, &flags);
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_flag_keeps_configured_path() {
        let mut config = DevlogConfig::default();
        let before = config.database.path.clone();
        let flags = GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            verbose: false,
            db: None,
        };
        apply_overrides(&mut config, &flags);
        assert_eq!(config.database.path, before);
    }
}
