//! Flat CSV export: one row per record.

use devlog_core::entities::LogRecord;
use devlog_core::enums::DateStyle;

use crate::aggregate::DeveloperGroup;
use crate::error::RenderError;

pub const HEADERS: [&str; 6] = ["Developer", "Date", "Tasks", "Mood", "Blockers", "Status"];

/// Written in the Blockers column when a record has no blocker text.
pub const NO_BLOCKER: &str = "None";

/// Stored blocker text, untouched, or [`NO_BLOCKER`] when it is absent or blank.
fn blocker_cell(record: &LogRecord) -> &str {
    match record.blockers.as_deref() {
        Some(text) if record.has_blocker() => text,
        _ => NO_BLOCKER,
    }
}

/// Encode groups in their given order, records in date order.
///
/// Tasks are written verbatim; the writer quotes fields containing
/// delimiters, quotes or line breaks.
///
/// # Errors
///
/// Returns `RenderError::Csv` or `RenderError::Io` if the in-memory writer fails.
pub fn encode(groups: &[DeveloperGroup], date_style: DateStyle) -> Result<Vec<u8>, RenderError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    let mut rows = 0usize;
    for group in groups {
        let name = group.developer.full_name();
        for record in &group.records {
            writer.write_record([
                name.as_str(),
                date_style.format(record.log_date).as_str(),
                record.tasks.as_str(),
                record.mood.label(),
                blocker_cell(record),
                record.status_label(),
            ])?;
            rows += 1;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Io(e.into_error()))?;
    tracing::debug!(rows, bytes = bytes.len(), "encoded CSV export");
    Ok(bytes)
}
