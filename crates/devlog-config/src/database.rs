//! Database location configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".devlog/devlog.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the local libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
