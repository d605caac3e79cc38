//! Paginated PDF report.
//!
//! The whole document is laid out into a page list first; footers are stamped
//! once the page count is known, then the list is serialized in one go. Any
//! failure aborts before bytes are returned.

pub mod layout;
pub mod metrics;
pub mod pdf;

use devlog_config::ReportConfig;
use devlog_core::enums::DateStyle;
use devlog_core::store::DateRange;

use self::layout::{Align, Column, FontFace, Layout, LegendLine, Page, Table};
use crate::aggregate::DeveloperGroup;
use crate::chart::{Chart, ChartRenderer};
use crate::error::RenderError;
use crate::stats::{ReportStatistics, one_decimal};

const MOOD_CHART: usize = 0;
const HOURS_CHART: usize = 1;
const CHART_DISPLAY_WIDTH: f32 = 300.0;

const METRIC_COLUMNS: [Column; 2] = [
    Column {
        title: "Metric",
        weight: 2.0,
    },
    Column {
        title: "Value",
        weight: 1.0,
    },
];

const LOG_COLUMNS: [Column; 5] = [
    Column {
        title: "Date",
        weight: 1.1,
    },
    Column {
        title: "Tasks",
        weight: 3.2,
    },
    Column {
        title: "Time Spent",
        weight: 1.5,
    },
    Column {
        title: "Mood",
        weight: 1.0,
    },
    Column {
        title: "Status",
        weight: 1.0,
    },
];

const BLOCKER_COLUMNS: [Column; 2] = [
    Column {
        title: "Date",
        weight: 1.0,
    },
    Column {
        title: "Blocker",
        weight: 4.0,
    },
];

/// Renders aggregated groups into PDF bytes.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    title: String,
    date_style: DateStyle,
    margin: f32,
    charts: ChartRenderer,
}

impl DocumentRenderer {
    /// # Errors
    ///
    /// Returns `RenderError::Chart` for a zero chart dimension.
    pub fn new(config: &ReportConfig) -> Result<Self, RenderError> {
        Ok(Self {
            title: config.title.clone(),
            date_style: config.date_style,
            margin: config.margin,
            charts: ChartRenderer::from_config(config)?,
        })
    }

    /// Lay out the full report without serializing it.
    #[must_use]
    pub fn layout(&self, groups: &[DeveloperGroup], range: DateRange) -> (Vec<Page>, [Chart; 2]) {
        let stats = ReportStatistics::compute(groups);
        let charts = self.charts(&stats);

        let mut layout = Layout::new(self.margin);
        self.title_block(&mut layout, range);
        Self::chart_block(&mut layout, MOOD_CHART, &charts[MOOD_CHART]);
        Self::chart_block(&mut layout, HOURS_CHART, &charts[HOURS_CHART]);
        Self::summary_block(&mut layout, &stats);

        for group in groups {
            layout.new_page();
            self.developer_block(&mut layout, group);
        }

        (layout.finish(), charts)
    }

    /// # Errors
    ///
    /// Returns `RenderError` if serialization fails; no partial output is kept.
    pub fn render(&self, groups: &[DeveloperGroup], range: DateRange) -> Result<Vec<u8>, RenderError> {
        let (pages, charts) = self.layout(groups, range);
        let bytes = pdf::write(&pages, &[&charts[MOOD_CHART].image, &charts[HOURS_CHART].image])?;
        tracing::debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF document");
        Ok(bytes)
    }

    fn charts(&self, stats: &ReportStatistics) -> [Chart; 2] {
        let moods: Vec<(String, usize)> = stats
            .mood_histogram
            .iter()
            .map(|(mood, count)| (mood.label().to_string(), *count))
            .collect();
        let (names, hours): (Vec<String>, Vec<f64>) =
            stats.hours_per_developer.iter().cloned().unzip();
        [
            self.charts.render_pie(&moods),
            self.charts.render_bar(&names, &hours),
        ]
    }

    fn title_block(&self, layout: &mut Layout, range: DateRange) {
        layout.text(&self.title, 24.0, FontFace::Bold, Align::Center);
        layout.gap(6.0);
        let period = format!(
            "Period: {} - {}",
            self.date_style.format(range.start),
            self.date_style.format(range.end)
        );
        layout.text(&period, 12.0, FontFace::Regular, Align::Center);
        layout.gap(24.0);
    }

    #[allow(clippy::cast_precision_loss)]
    fn chart_block(layout: &mut Layout, index: usize, chart: &Chart) {
        let width = CHART_DISPLAY_WIDTH.min(layout.content_width() * 0.6);
        let height = width * chart.height() as f32 / chart.width() as f32;

        let mut legend: Vec<LegendLine> = chart
            .legend
            .iter()
            .map(|entry| LegendLine {
                text: format!("{}: {}", entry.label, entry.value),
                swatch: Some(entry.color.0),
            })
            .collect();
        if chart.is_placeholder() {
            legend.push(LegendLine {
                text: "No data for this period".into(),
                swatch: None,
            });
        }
        if let Some(max) = chart.axis_max {
            legend.push(LegendLine {
                text: format!("Scale: 0 - {max} hours"),
                swatch: None,
            });
        }

        layout.heading(&chart.title, 12.0);
        layout.image(index, width, height, &legend);
        layout.gap(12.0);
    }

    fn summary_block(layout: &mut Layout, stats: &ReportStatistics) {
        layout.heading("Summary", 16.0);
        layout.table(&Table {
            columns: &METRIC_COLUMNS,
            rows: vec![
                vec!["Total Logs".into(), stats.total_logs.to_string()],
                vec!["Total Blockers".into(), stats.total_blockers.to_string()],
                vec!["Average Logs per Developer".into(), stats.average_display()],
            ],
            header_size: 12.0,
            body_size: 10.0,
        });
        if stats.developer_count == 0 {
            layout.gap(8.0);
            layout.text(
                "No developers report to this manager.",
                10.0,
                FontFace::Regular,
                Align::Left,
            );
        }
    }

    fn developer_block(&self, layout: &mut Layout, group: &DeveloperGroup) {
        layout.heading(&group.developer.full_name(), 16.0);
        layout.table(&Table {
            columns: &METRIC_COLUMNS,
            rows: vec![
                vec!["Total Hours".into(), one_decimal(group.total_hours)],
                vec!["Blockers".into(), group.blocker_count.to_string()],
                vec!["Logs Submitted".into(), group.log_count().to_string()],
            ],
            header_size: 12.0,
            body_size: 10.0,
        });
        layout.gap(12.0);

        layout.table(&Table {
            columns: &LOG_COLUMNS,
            rows: group
                .records
                .iter()
                .map(|record| {
                    vec![
                        self.date_style.format(record.log_date),
                        record.tasks.clone(),
                        record.time_spent_display(),
                        record.mood.label().to_string(),
                        record.status_label().to_string(),
                    ]
                })
                .collect(),
            header_size: 10.0,
            body_size: 8.0,
        });
        if group.records.is_empty() {
            layout.gap(4.0);
            layout.text("No logs in this period.", 8.0, FontFace::Regular, Align::Left);
        }

        let blockers: Vec<Vec<String>> = group
            .blocked_records()
            .map(|record| {
                vec![
                    self.date_style.format(record.log_date),
                    record.blocker_text().unwrap_or_default().to_string(),
                ]
            })
            .collect();
        if !blockers.is_empty() {
            layout.gap(12.0);
            layout.heading("Blockers", 12.0);
            layout.table(&Table {
                columns: &BLOCKER_COLUMNS,
                rows: blockers,
                header_size: 10.0,
                body_size: 8.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use devlog_core::entities::{Developer, LogRecord, TimeEntry};
    use devlog_core::enums::{Mood, Role};
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn developer(id: &str, first: &str) -> Developer {
        Developer {
            id: id.into(),
            first_name: first.into(),
            last_name: "Smith".into(),
            email: format!("{id}@example.com"),
            role: Role::Developer,
            manager_id: Some("m1".into()),
            created_at: Utc::now(),
        }
    }

    fn record(owner: &str, day: u32, mood: Mood, blockers: Option<&str>) -> LogRecord {
        let now = Utc::now();
        LogRecord {
            id: format!("{owner}-{day}"),
            developer_id: owner.into(),
            log_date: date(day),
            tasks: "<p>Implemented login</p>".into(),
            time_spent: vec![TimeEntry {
                task_id: "t1".into(),
                hours: 2,
                minutes: 30,
            }],
            mood,
            blockers: blockers.map(String::from),
            is_reviewed: false,
            review_comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn renderer() -> DocumentRenderer {
        DocumentRenderer::new(&ReportConfig::default()).unwrap()
    }

    fn week() -> DateRange {
        DateRange::new(date(1), date(7)).unwrap()
    }

    fn all_text(pages: &[Page]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|page| page.texts().map(String::from).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn each_developer_starts_a_new_page() {
        let groups = vec![
            DeveloperGroup::new(developer("a", "Ann"), vec![record("a", 3, Mood::Good, None)]),
            DeveloperGroup::new(developer("b", "Bob"), vec![]),
        ];
        let (pages, _) = renderer().layout(&groups, week());
        assert_eq!(pages.len(), 3);
        assert!(pages[1].texts().any(|t| t == "Ann Smith"));
        assert!(pages[2].texts().any(|t| t == "Bob Smith"));
        assert!(pages[2].texts().any(|t| t == "Page 3 of 3"));
    }

    #[test]
    fn first_page_carries_title_period_and_summary() {
        let groups = vec![DeveloperGroup::new(
            developer("a", "Ann"),
            vec![record("a", 3, Mood::NotGreat, Some("CI down"))],
        )];
        let (pages, charts) = renderer().layout(&groups, week());
        let first: Vec<&str> = pages[0].texts().collect();
        assert!(first.contains(&"Weekly Development Report"));
        assert!(first.contains(&"Period: 2024-01-01 - 2024-01-07"));
        assert!(first.contains(&"Summary"));
        assert!(first.contains(&"Not Great: 1 (100%)"));
        assert_eq!(charts[MOOD_CHART].legend.len(), 1);
        assert_eq!(pages[0].image_indexes(), vec![MOOD_CHART, HOURS_CHART]);
    }

    #[test]
    fn developer_page_lists_logs_and_blockers() {
        let groups = vec![DeveloperGroup::new(
            developer("a", "Ann"),
            vec![
                record("a", 4, Mood::Great, Some("  waiting on design  ")),
                record("a", 2, Mood::Bad, Some("   ")),
            ],
        )];
        let (pages, _) = renderer().layout(&groups, week());
        let texts = all_text(&pages[1..]);
        for expected in ["5.0", "Logs Submitted", "2h30m", "Great", "Bad", "Pending", "Blockers"] {
            assert!(texts.iter().any(|t| t == expected), "missing {expected}");
        }
        assert!(texts.iter().any(|t| t == "waiting on design"));
        let dates: Vec<&String> = texts.iter().filter(|t| t.starts_with("2024-01-0")).collect();
        // Two log rows in date order, then one blocker row.
        assert_eq!(dates, vec!["2024-01-02", "2024-01-04", "2024-01-04"]);
    }

    #[test]
    fn unrecognized_mood_is_laid_out_verbatim() {
        let groups = vec![DeveloperGroup::new(
            developer("a", "Ann"),
            vec![record("a", 3, Mood::Unrecognized("🙂".into()), None)],
        )];
        let (pages, charts) = renderer().layout(&groups, week());
        assert!(all_text(&pages[1..]).iter().any(|t| t == "🙂"));
        assert_eq!(charts[MOOD_CHART].legend[0].label, "🙂");
        let bytes = renderer().render(&groups, week()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn empty_team_still_renders() {
        let (pages, charts) = renderer().layout(&[], week());
        assert_eq!(pages.len(), 1);
        let texts = all_text(&pages);
        assert!(texts.iter().any(|t| t == "N/A"));
        assert!(charts.iter().all(Chart::is_placeholder));
        let bytes = renderer().render(&[], week()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn date_style_applies_to_period() {
        let config = ReportConfig {
            date_style: DateStyle::EnUs,
            ..ReportConfig::default()
        };
        let renderer = DocumentRenderer::new(&config).unwrap();
        let (pages, _) = renderer.layout(&[], week());
        assert!(pages[0].texts().any(|t| t == "Period: 1/1/2024 - 1/7/2024"));
    }
}
