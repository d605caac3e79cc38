//! General application configuration.

use devlog_core::enums::ReportFormat;
use serde::{Deserialize, Serialize};

const fn default_format() -> ReportFormat {
    ReportFormat::Pdf
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Report format used when `devlog report` is run without a format argument.
    #[serde(default = "default_format")]
    pub default_format: ReportFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}
