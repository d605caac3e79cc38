//! Mood, role, report format, ordering, and date style enums for devlog.
//!
//! `Mood` is the one canonical mood-to-label mapping; statistics, CSV export,
//! and the PDF document all go through [`Mood::label`].

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Daily sentiment attached to a log record.
///
/// The set is closed: `GREAT`, `GOOD`, `NEUTRAL`, `NOT_GREAT`, `BAD`. Values
/// outside the set that come back from storage are kept verbatim in
/// `Unrecognized` so rendering can pass them through instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    NotGreat,
    Bad,
    Unrecognized(String),
}

impl Mood {
    /// The closed set, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Great,
        Self::Good,
        Self::Neutral,
        Self::NotGreat,
        Self::Bad,
    ];

    /// Storage representation (`SCREAMING_SNAKE_CASE`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Great => "GREAT",
            Self::Good => "GOOD",
            Self::Neutral => "NEUTRAL",
            Self::NotGreat => "NOT_GREAT",
            Self::Bad => "BAD",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human-readable label. Unrecognized values are returned verbatim.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::NotGreat => "Not Great",
            Self::Bad => "Bad",
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Parse a storage value. Never fails: unknown input becomes `Unrecognized`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GREAT" => Self::Great,
            "GOOD" => Self::Good,
            "NEUTRAL" => Self::Neutral,
            "NOT_GREAT" => Self::NotGreat,
            "BAD" => Self::Bad,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Mood {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Developer,
    Manager,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportFormat
// ---------------------------------------------------------------------------

/// Encoding of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Pdf,
    Csv,
}

impl ReportFormat {
    /// Parse a requested format. Only the exact values `pdf` and `csv` are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pdf" => Some(Self::Pdf),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    /// File extension, identical to [`as_str`](Self::as_str).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DateOrder
// ---------------------------------------------------------------------------

/// Chronological ordering of a record listing.
///
/// Team views list newest first; report tables run oldest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    Ascending,
    #[default]
    Descending,
}

impl DateOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DateStyle
// ---------------------------------------------------------------------------

/// Locale used when printing calendar dates in reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `2024-01-03`
    #[default]
    Iso,
    /// `1/3/2024`
    EnUs,
    /// `03/01/2024`
    EnGb,
}

impl DateStyle {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%d",
            Self::EnUs => "%-m/%-d/%Y",
            Self::EnGb => "%d/%m/%Y",
        }
    }

    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::EnUs => "en_us",
            Self::EnGb => "en_gb",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(mood_great, Mood, Mood::Great, "GREAT");
    test_serde_roundtrip!(mood_not_great, Mood, Mood::NotGreat, "NOT_GREAT");
    test_serde_roundtrip!(
        mood_unrecognized,
        Mood,
        Mood::Unrecognized("ECSTATIC".into()),
        "ECSTATIC"
    );
    test_serde_roundtrip!(role_manager, Role, Role::Manager, "manager");
    test_serde_roundtrip!(format_csv, ReportFormat, ReportFormat::Csv, "csv");
    test_serde_roundtrip!(order_asc, DateOrder, DateOrder::Ascending, "ascending");
    test_serde_roundtrip!(style_en_us, DateStyle, DateStyle::EnUs, "en_us");

    // --- Labels ---

    #[test]
    fn mood_labels_cover_closed_set() {
        let labels: Vec<&str> = Mood::ALL.iter().map(Mood::label).collect();
        assert_eq!(labels, ["Great", "Good", "Neutral", "Not Great", "Bad"]);
    }

    #[test]
    fn unrecognized_mood_label_passes_through() {
        let mood = Mood::parse("🙂");
        assert!(!mood.is_recognized());
        assert_eq!(mood.label(), "🙂");
        assert_eq!(mood.as_str(), "🙂");
    }

    #[test]
    fn mood_parse_is_case_sensitive() {
        assert_eq!(Mood::parse("good"), Mood::Unrecognized("good".into()));
        assert_eq!(Mood::parse("GOOD"), Mood::Good);
    }

    // --- Report format ---

    #[test]
    fn report_format_parse_accepts_only_pdf_and_csv() {
        assert_eq!(ReportFormat::parse("pdf"), Some(ReportFormat::Pdf));
        assert_eq!(ReportFormat::parse("csv"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::parse("xlsx"), None);
        assert_eq!(ReportFormat::parse(""), None);
    }

    #[test]
    fn report_format_content_types() {
        assert_eq!(ReportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(ReportFormat::Csv.content_type(), "text/csv");
    }

    // --- Date styles ---

    #[test]
    fn date_styles_format_calendar_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(DateStyle::Iso.format(date), "2024-01-03");
        assert_eq!(DateStyle::EnUs.format(date), "1/3/2024");
        assert_eq!(DateStyle::EnGb.format(date), "03/01/2024");
    }

    #[test]
    fn default_order_is_newest_first() {
        assert_eq!(DateOrder::default(), DateOrder::Descending);
    }
}
