//! Report rendering configuration.
//!
//! Chart dimensions are shared by every chart in a document so the layout can
//! reserve constant space for them.

use devlog_core::enums::DateStyle;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_title() -> String {
    "Weekly Development Report".to_string()
}

const fn default_chart_width() -> u32 {
    600
}

const fn default_chart_height() -> u32 {
    400
}

const fn default_margin() -> f32 {
    50.0
}

fn default_filename_prefix() -> String {
    "weekly-report".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Title printed at the top of the first page.
    #[serde(default = "default_title")]
    pub title: String,

    /// How calendar dates are printed in the document and the CSV export.
    #[serde(default)]
    pub date_style: DateStyle,

    /// Raster width of every chart, in pixels.
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Raster height of every chart, in pixels.
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Page margin in PDF points.
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Artifact filenames are `<prefix>-<start>-to-<end>.<ext>`.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl ReportConfig {
    /// Reject values the renderer cannot lay out.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.chart_width/chart_height".into(),
                reason: format!(
                    "chart dimensions must be non-zero, got {}x{}",
                    self.chart_width, self.chart_height
                ),
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 || self.margin > 200.0 {
            return Err(ConfigError::InvalidValue {
                field: "report.margin".into(),
                reason: format!("margin must be between 0 and 200 points, got {}", self.margin),
            });
        }
        if self.filename_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.filename_prefix".into(),
                reason: "prefix must not be empty".into(),
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            date_style: DateStyle::default(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            margin: default_margin(),
            filename_prefix: default_filename_prefix(),
        }
    }
}
