//! Report generation: scope → fetch → group → encode.

use chrono::NaiveDate;
use devlog_config::ReportConfig;
use devlog_core::enums::ReportFormat;
use devlog_core::store::{DateRange, LogStore};

use crate::aggregate::{self, DeveloperGroup};
use crate::csv_export;
use crate::document::DocumentRenderer;
use crate::error::{RenderError, ReportContext, ReportError};
use crate::scope;

/// Finished report bytes plus what a caller needs to deliver them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub bytes: Vec<u8>,
    pub format: ReportFormat,
    pub content_type: &'static str,
    pub filename: String,
}

/// Generates reports over a [`LogStore`]. Holds no per-request state, so one
/// orchestrator can serve concurrent requests.
#[derive(Debug)]
pub struct ReportOrchestrator<S> {
    store: S,
    config: ReportConfig,
}

impl<S: LogStore> ReportOrchestrator<S> {
    pub const fn new(store: S, config: ReportConfig) -> Self {
        Self { store, config }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// `<prefix>-<start>-to-<end>.<ext>` with ISO dates.
    #[must_use]
    pub fn filename(&self, start: NaiveDate, end: NaiveDate, format: ReportFormat) -> String {
        format!(
            "{}-{}-to-{}.{}",
            self.config.filename_prefix,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            format.extension()
        )
    }

    /// Generate the `format` (`"pdf"` or `"csv"`) report of everything
    /// `manager_id`'s reports logged between `start` and `end` inclusive.
    ///
    /// A manager without reports gets a valid empty-team artifact.
    ///
    /// # Errors
    ///
    /// - `ReportError::UnsupportedFormat` for any other format string.
    /// - `ReportError::InvalidRange` when `start` is after `end`.
    /// - `ReportError::Store` when developers or records cannot be fetched.
    /// - `ReportError::Render` / `ReportError::Task` when encoding fails.
    pub async fn generate(
        &self,
        manager_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        format: &str,
    ) -> Result<ReportArtifact, ReportError> {
        let context = ReportContext {
            manager_id: manager_id.to_string(),
            start,
            end,
            format: format.to_string(),
        };

        let Some(report_format) = ReportFormat::parse(format) else {
            return Err(ReportError::UnsupportedFormat { context });
        };
        let Ok(range) = DateRange::new(start, end) else {
            return Err(ReportError::InvalidRange { context });
        };

        let scope = match scope::resolve(&self.store, manager_id).await {
            Ok(scope) => scope,
            Err(source) => return Err(ReportError::Store { context, source }),
        };
        let records = if scope.is_empty() {
            Vec::new()
        } else {
            match self
                .store
                .fetch_records(&scope.developer_ids(), Some(range))
                .await
            {
                Ok(records) => records,
                Err(source) => return Err(ReportError::Store { context, source }),
            }
        };
        tracing::debug!(
            manager_id,
            developers = scope.len(),
            records = records.len(),
            "fetched report data"
        );

        let groups = aggregate::group(records, scope.developers());
        let config = self.config.clone();
        let rendered = tokio::task::spawn_blocking(move || {
            render(&config, report_format, &groups, range)
        })
        .await;

        let bytes = match rendered {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(source)) => {
                tracing::warn!(%context, error = %source, "report rendering failed");
                return Err(ReportError::Render { context, source });
            }
            Err(source) => return Err(ReportError::Task { context, source }),
        };

        tracing::info!(
            manager_id,
            %start,
            %end,
            format = report_format.as_str(),
            bytes = bytes.len(),
            "generated report"
        );

        Ok(ReportArtifact {
            bytes,
            format: report_format,
            content_type: report_format.content_type(),
            filename: self.filename(start, end, report_format),
        })
    }
}

fn render(
    config: &ReportConfig,
    format: ReportFormat,
    groups: &[DeveloperGroup],
    range: DateRange,
) -> Result<Vec<u8>, RenderError> {
    match format {
        ReportFormat::Pdf => DocumentRenderer::new(config)?.render(groups, range),
        ReportFormat::Csv => csv_export::encode(groups, config.date_style),
    }
}
