//! # devlog-report
//!
//! Manager-scoped aggregation and report rendering.
//!
//! Data flows one way: [`scope`] decides which developers a manager may see,
//! [`filter`] narrows record listings, [`aggregate`] groups records per
//! developer, [`stats`] derives the figures, and [`chart`], [`document`] and
//! [`csv_export`] turn the groups into bytes. [`orchestrator`] wires the chain
//! together over any [`devlog_core::store::LogStore`].

pub mod aggregate;
pub mod chart;
pub mod csv_export;
pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod orchestrator;
pub mod scope;
pub mod stats;

pub use aggregate::DeveloperGroup;
pub use error::{RenderError, ReportContext, ReportError, StatsError};
pub use filter::{LogFilter, team_logs};
pub use memory::MemoryStore;
pub use orchestrator::{ReportArtifact, ReportOrchestrator};
pub use scope::AccessScope;
