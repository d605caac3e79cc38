//! Error types for the report engine.
//!
//! `StatsError` and `RenderError` stay local to the pure components.
//! `ReportError` is what the orchestrator returns; every variant carries the
//! [`ReportContext`] of the failed request so callers can log it as-is.

use std::fmt;

use chrono::NaiveDate;
use devlog_core::errors::CoreError;
use thiserror::Error;

/// Failures of the statistics engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Average requested over zero developers.
    #[error("average logs per developer is undefined for zero developers ({total_logs} logs)")]
    DivisionUndefined { total_logs: usize },
}

/// Failures while producing report bytes. Any of these aborts the artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart setup failed: {0}")]
    Chart(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while encoding: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout failed: {0}")]
    Layout(String),
}

/// Request parameters attached to every orchestrator failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    pub manager_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub format: String,
}

impl fmt::Display for ReportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "manager={} range={}..={} format={}",
            self.manager_id, self.start, self.end, self.format
        )
    }
}

/// Errors returned by [`crate::orchestrator::ReportOrchestrator::generate`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Requested format is neither `pdf` nor `csv`.
    #[error("unsupported report format '{}' ({context})", context.format)]
    UnsupportedFormat { context: ReportContext },

    /// Start date falls after end date.
    #[error("invalid date range: {} is after {} ({context})", context.start, context.end)]
    InvalidRange { context: ReportContext },

    /// The store could not supply developers or records.
    #[error("failed to load report data ({context}): {source}")]
    Store {
        context: ReportContext,
        #[source]
        source: CoreError,
    },

    /// Rendering failed; no bytes were produced.
    #[error("failed to render report ({context}): {source}")]
    Render {
        context: ReportContext,
        #[source]
        source: RenderError,
    },

    /// The blocking render task panicked or was cancelled.
    #[error("render task did not complete ({context}): {source}")]
    Task {
        context: ReportContext,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ReportError {
    /// Whether the failure was caused by the caller's input rather than the server.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::InvalidRange { .. }
        )
    }

    #[must_use]
    pub const fn context(&self) -> &ReportContext {
        match self {
            Self::UnsupportedFormat { context }
            | Self::InvalidRange { context }
            | Self::Store { context, .. }
            | Self::Render { context, .. }
            | Self::Task { context, .. } => context,
        }
    }
}
