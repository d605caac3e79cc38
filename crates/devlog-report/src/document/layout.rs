//! Page layout into an in-memory list of draw operations.
//!
//! Coordinates on [`DrawOp`] are PDF user space (origin bottom-left, points).
//! The layout cursor itself runs top-down from the upper margin.

use super::metrics::{text_width, wrap};

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

const LINE_SPACING: f32 = 1.25;
const CELL_PADDING: f32 = 4.0;
const LEGEND_GAP: f32 = 15.0;
const SWATCH: f32 = 8.0;
const FOOTER_SIZE: f32 = 10.0;
const HEADER_FILL: [u8; 3] = [0xEE, 0xEE, 0xEE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        face: FontFace,
        text: String,
    },
    Image {
        index: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [u8; 3],
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Indexes of the images drawn on this page, ascending and unique.
    #[must_use]
    pub fn image_indexes(&self) -> Vec<usize> {
        let mut indexes: Vec<usize> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        indexes.sort_unstable();
        indexes.dedup();
        indexes
    }

    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// One legend line; `swatch` draws a small color square before the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendLine {
    pub text: String,
    pub swatch: Option<[u8; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub title: &'static str,
    /// Share of the content width relative to the other columns.
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    pub columns: &'a [Column],
    pub rows: Vec<Vec<String>>,
    pub header_size: f32,
    pub body_size: f32,
}

/// Flows content top-down, breaking pages as needed.
#[derive(Debug)]
pub struct Layout {
    finished: Vec<Page>,
    current: Page,
    margin: f32,
    cursor: f32,
}

impl Layout {
    #[must_use]
    pub fn new(margin: f32) -> Self {
        Self {
            finished: Vec::new(),
            current: Page::default(),
            margin,
            cursor: margin,
        }
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        PAGE_WIDTH - 2.0 * self.margin
    }

    fn usable_height(&self) -> f32 {
        PAGE_HEIGHT - 2.0 * self.margin
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= PAGE_HEIGHT - self.margin
    }

    fn at_page_top(&self) -> bool {
        self.cursor <= self.margin
    }

    /// Start a new page unless `height` still fits or the page is untouched.
    pub fn ensure(&mut self, height: f32) {
        if !self.fits(height) && !self.at_page_top() {
            self.new_page();
        }
    }

    pub fn new_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.cursor = self.margin;
    }

    pub fn gap(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Distance from the page top → PDF y coordinate.
    const fn y(top: f32) -> f32 {
        PAGE_HEIGHT - top
    }

    fn push(&mut self, op: DrawOp) {
        self.current.ops.push(op);
    }

    /// Wrapped text spanning the content width.
    pub fn text(&mut self, text: &str, size: f32, face: FontFace, align: Align) {
        let leading = size * LINE_SPACING;
        let width = self.content_width();
        for line in wrap(text, face, size, width) {
            self.ensure(leading);
            let x = match align {
                Align::Left => self.margin,
                Align::Center => self.margin + (width - text_width(&line, face, size)).max(0.0) / 2.0,
            };
            let baseline = Self::y(self.cursor + size);
            self.push(DrawOp::Text {
                x,
                y: baseline,
                size,
                face,
                text: line,
            });
            self.cursor += leading;
        }
    }

    /// Bold text with a rule underneath.
    pub fn heading(&mut self, text: &str, size: f32) {
        self.ensure(size * LINE_SPACING * 2.0);
        self.text(text, size, FontFace::Bold, Align::Left);
        let y = Self::y(self.cursor - size * 0.1);
        let x2 = self.margin + text_width(text, FontFace::Bold, size).min(self.content_width());
        self.push(DrawOp::Line {
            x1: self.margin,
            y1: y,
            x2,
            y2: y,
        });
        self.gap(size * 0.5);
    }

    /// Image at the left margin with legend lines beside it.
    pub fn image(&mut self, index: usize, width: f32, height: f32, legend: &[LegendLine]) {
        let legend_size = 10.0;
        let leading = legend_size * LINE_SPACING;
        let legend_height = leading * f32::from(u16::try_from(legend.len()).unwrap_or(u16::MAX));
        let block = height.max(legend_height);
        self.ensure(block);

        let top = self.cursor;
        self.push(DrawOp::Image {
            index,
            x: self.margin,
            y: Self::y(top + height),
            width,
            height,
        });

        let legend_x = self.margin + width + LEGEND_GAP;
        let mut line_top = top;
        for line in legend {
            let mut text_x = legend_x;
            if let Some(color) = line.swatch {
                self.push(DrawOp::FillRect {
                    x: legend_x,
                    y: Self::y(line_top + legend_size * 0.9),
                    width: SWATCH,
                    height: SWATCH,
                    color,
                });
                text_x += SWATCH + 4.0;
            }
            self.push(DrawOp::Text {
                x: text_x,
                y: Self::y(line_top + legend_size),
                size: legend_size,
                face: FontFace::Regular,
                text: line.text.clone(),
            });
            line_top += leading;
        }
        self.cursor = top + block;
    }

    /// Table with a shaded header row, repeated at the top of every
    /// continuation page. Cells wrap to their column width.
    pub fn table(&mut self, table: &Table<'_>) {
        let total_weight: f32 = table.columns.iter().map(|c| c.weight).sum();
        let content = self.content_width();
        let widths: Vec<f32> = table
            .columns
            .iter()
            .map(|c| content * c.weight / total_weight.max(f32::EPSILON))
            .collect();

        let header_height = table.header_size * LINE_SPACING + 2.0 * CELL_PADDING;
        let body_leading = table.body_size * LINE_SPACING;
        let max_lines = ((self.usable_height() - header_height - 2.0 * CELL_PADDING) / body_leading)
            .floor()
            .max(1.0);

        let rows: Vec<(Vec<Vec<String>>, f32)> = table
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<Vec<String>> = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| {
                        let mut lines = wrap(
                            cell,
                            FontFace::Regular,
                            table.body_size,
                            width - 2.0 * CELL_PADDING,
                        );
                        truncate_lines(&mut lines, max_lines);
                        lines
                    })
                    .collect();
                let line_count = cells.iter().map(Vec::len).max().unwrap_or(1);
                let height = line_count_height(line_count, body_leading) + 2.0 * CELL_PADDING;
                (cells, height)
            })
            .collect();

        let first_row = rows.first().map_or(0.0, |(_, h)| *h);
        self.ensure(header_height + first_row);
        self.table_header(table, &widths, header_height);

        for (cells, height) in rows {
            if !self.fits(height) {
                self.new_page();
                self.table_header(table, &widths, header_height);
            }
            let top = self.cursor;
            let mut x = self.margin;
            for (lines, width) in cells.iter().zip(&widths) {
                let mut line_top = top + CELL_PADDING;
                for line in lines {
                    self.push(DrawOp::Text {
                        x: x + CELL_PADDING,
                        y: Self::y(line_top + table.body_size),
                        size: table.body_size,
                        face: FontFace::Regular,
                        text: line.clone(),
                    });
                    line_top += body_leading;
                }
                x += width;
            }
            self.cursor = top + height;
            self.rule();
        }
    }

    fn table_header(&mut self, table: &Table<'_>, widths: &[f32], height: f32) {
        let top = self.cursor;
        self.push(DrawOp::FillRect {
            x: self.margin,
            y: Self::y(top + height),
            width: self.content_width(),
            height,
            color: HEADER_FILL,
        });
        let mut x = self.margin;
        for (column, width) in table.columns.iter().zip(widths) {
            self.push(DrawOp::Text {
                x: x + CELL_PADDING,
                y: Self::y(top + CELL_PADDING + table.header_size),
                size: table.header_size,
                face: FontFace::Bold,
                text: column.title.to_string(),
            });
            x += width;
        }
        self.cursor = top + height;
        self.rule();
    }

    fn rule(&mut self) {
        let y = Self::y(self.cursor);
        self.push(DrawOp::Line {
            x1: self.margin,
            y1: y,
            x2: PAGE_WIDTH - self.margin,
            y2: y,
        });
    }

    /// Close the last page and stamp `Page i of N` on every page.
    #[must_use]
    pub fn finish(mut self) -> Vec<Page> {
        self.finished.push(std::mem::take(&mut self.current));
        let total = self.finished.len();
        let baseline = (self.margin / 2.0).max(FOOTER_SIZE);
        for (idx, page) in self.finished.iter_mut().enumerate() {
            let text = format!("Page {} of {total}", idx + 1);
            let width = text_width(&text, FontFace::Regular, FOOTER_SIZE);
            page.ops.push(DrawOp::Text {
                x: (PAGE_WIDTH - width) / 2.0,
                y: baseline,
                size: FOOTER_SIZE,
                face: FontFace::Regular,
                text,
            });
        }
        self.finished
    }
}

fn truncate_lines(lines: &mut Vec<String>, max_lines: f32) {
    let limit = line_limit(max_lines);
    if lines.len() > limit {
        lines.truncate(limit);
        if let Some(last) = lines.last_mut() {
            last.push_str(" ...");
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn line_limit(max_lines: f32) -> usize {
    max_lines as usize
}

#[allow(clippy::cast_precision_loss)]
fn line_count_height(lines: usize, leading: f32) -> f32 {
    lines as f32 * leading
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const COLUMNS: [Column; 2] = [
        Column {
            title: "Date",
            weight: 1.0,
        },
        Column {
            title: "Blocker",
            weight: 3.0,
        },
    ];

    fn table(rows: usize) -> Table<'static> {
        Table {
            columns: &COLUMNS,
            rows: (0..rows)
                .map(|i| vec![format!("2024-01-{:02}", i % 28 + 1), format!("row {i}")])
                .collect(),
            header_size: 10.0,
            body_size: 8.0,
        }
    }

    #[test]
    fn footers_number_every_page() {
        let mut layout = Layout::new(50.0);
        layout.text("first", 12.0, FontFace::Regular, Align::Left);
        layout.new_page();
        layout.new_page();
        let pages = layout.finish();
        assert_eq!(pages.len(), 3);
        let last: Vec<&str> = pages[2].texts().collect();
        assert_eq!(last, vec!["Page 3 of 3"]);
        assert!(pages[0].texts().any(|t| t == "Page 1 of 3"));
    }

    #[test]
    fn long_table_repeats_header_on_continuation_pages() {
        let mut layout = Layout::new(50.0);
        layout.table(&table(120));
        let pages = layout.finish();
        assert!(pages.len() > 1);
        for page in &pages {
            assert_eq!(page.texts().filter(|t| *t == "Blocker").count(), 1);
        }
        let rows: usize = pages
            .iter()
            .map(|p| p.texts().filter(|t| t.starts_with("row ")).count())
            .sum();
        assert_eq!(rows, 120);
    }

    #[test]
    fn content_stays_inside_margins() {
        let mut layout = Layout::new(50.0);
        layout.table(&table(200));
        for page in layout.finish() {
            for op in &page.ops {
                if let DrawOp::Text { y, text, .. } = op {
                    if !text.starts_with("Page ") {
                        assert!(*y >= 50.0 && *y <= PAGE_HEIGHT - 50.0, "{text} at {y}");
                    }
                }
            }
        }
    }

    #[test]
    fn centered_text_is_centered() {
        let mut layout = Layout::new(50.0);
        layout.text("Period", 12.0, FontFace::Regular, Align::Center);
        let pages = layout.finish();
        let DrawOp::Text { x, .. } = &pages[0].ops[0] else {
            panic!("expected text op");
        };
        let width = text_width("Period", FontFace::Regular, 12.0);
        assert!((x + width / 2.0 - PAGE_WIDTH / 2.0).abs() < 0.01);
    }

    #[test]
    fn oversized_cells_are_truncated_to_one_page() {
        let mut layout = Layout::new(50.0);
        let tall = "word ".repeat(5000);
        layout.table(&Table {
            columns: &COLUMNS,
            rows: vec![vec!["2024-01-01".into(), tall]],
            header_size: 10.0,
            body_size: 8.0,
        });
        let pages = layout.finish();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].texts().any(|t| t.ends_with(" ...")));
    }

    #[test]
    fn images_are_tracked_per_page() {
        let mut layout = Layout::new(50.0);
        layout.image(1, 300.0, 300.0, &[]);
        layout.image(0, 300.0, 300.0, &[]);
        layout.image(1, 300.0, 300.0, &[]);
        let pages = layout.finish();
        assert_eq!(pages[0].image_indexes(), vec![0, 1]);
        assert_eq!(pages[1].image_indexes(), vec![1]);
    }
}
