//! Raster pie and bar charts.
//!
//! Charts are plain RGB images of a fixed size. Text (titles, legends, axis
//! scale) is not drawn into the raster; it travels on [`Chart`] and is typeset
//! by the document beside the image.

use std::f64::consts::TAU;
use std::io::Cursor;

use devlog_config::ReportConfig;
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::RenderError;

/// Pie sector colors, assigned by category position.
pub const PIE_PALETTE: [Rgb<u8>; 5] = [
    Rgb([0x4C, 0xAF, 0x50]),
    Rgb([0x8B, 0xC3, 0x4A]),
    Rgb([0xFF, 0xC1, 0x07]),
    Rgb([0xFF, 0x98, 0x00]),
    Rgb([0xF4, 0x43, 0x36]),
];

pub const BAR_COLOR: Rgb<u8> = Rgb([0x21, 0x96, 0xF3]);

const BACKGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const GRID: Rgb<u8> = Rgb([0xE0, 0xE0, 0xE0]);
const AXIS: Rgb<u8> = Rgb([0x61, 0x61, 0x61]);
const PLACEHOLDER: Rgb<u8> = Rgb([0xBD, 0xBD, 0xBD]);

const GRID_LINES: u32 = 5;

pub const MOOD_CHART_TITLE: &str = "Mood Distribution";
pub const HOURS_CHART_TITLE: &str = "Productivity by Developer";

/// One legend line printed next to a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb<u8>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub image: RgbImage,
    pub legend: Vec<LegendEntry>,
    /// Top of the value axis for bar charts.
    pub axis_max: Option<f64>,
}

impl Chart {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True when there was nothing to plot.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.legend.is_empty()
    }

    /// # Errors
    ///
    /// Returns `RenderError::Image` if PNG encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Draws every chart at the same configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl ChartRenderer {
    /// # Errors
    ///
    /// Returns `RenderError::Chart` for a zero dimension.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Chart(format!(
                "chart size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// # Errors
    ///
    /// Returns `RenderError::Chart` for a zero configured dimension.
    pub fn from_config(config: &ReportConfig) -> Result<Self, RenderError> {
        Self::new(config.chart_width, config.chart_height)
    }

    /// Pie chart of `(label, count)` categories in the given order.
    #[must_use]
    pub fn render_pie(&self, categories: &[(String, usize)]) -> Chart {
        let total: usize = categories.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return self.placeholder(MOOD_CHART_TITLE);
        }

        let mut image = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let cx = f64::from(self.width) / 2.0;
        let cy = f64::from(self.height) / 2.0;
        let radius = (cx.min(cy) - 10.0).max(1.0);

        // Cumulative end angle of each sector, clockwise from 12 o'clock.
        let mut running = 0usize;
        let bounds: Vec<f64> = categories
            .iter()
            .map(|(_, count)| {
                running += count;
                TAU * ratio(running, total)
            })
            .collect();

        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            if dx.hypot(dy) > radius {
                continue;
            }
            let angle = dx.atan2(-dy).rem_euclid(TAU);
            let sector = bounds
                .iter()
                .position(|&end| angle < end)
                .unwrap_or(bounds.len() - 1);
            *pixel = PIE_PALETTE[sector % PIE_PALETTE.len()];
        }

        let legend = categories
            .iter()
            .enumerate()
            .map(|(idx, (label, count))| LegendEntry {
                label: label.clone(),
                color: PIE_PALETTE[idx % PIE_PALETTE.len()],
                value: format!("{count} ({:.0}%)", ratio(*count, total) * 100.0),
            })
            .collect();

        Chart {
            title: MOOD_CHART_TITLE.to_string(),
            image,
            legend,
            axis_max: None,
        }
    }

    /// Vertical bar chart; `labels` and `values` are paired by position.
    ///
    /// Only an empty category list gives the placeholder. All-zero values
    /// still draw the axis (`0..1`) and list every label.
    #[must_use]
    pub fn render_bar(&self, labels: &[String], values: &[f64]) -> Chart {
        let bars: Vec<(&String, f64)> = labels
            .iter()
            .zip(values.iter().map(|&v| if v.is_finite() { v.max(0.0) } else { 0.0 }))
            .collect();
        let max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        if bars.is_empty() {
            return self.placeholder(HOURS_CHART_TITLE);
        }

        let axis_max = axis_ceiling(max);
        let mut image = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let plot = PlotArea::within(self.width, self.height);

        for step in 0..=GRID_LINES {
            let y = plot.bottom - (plot.height() * step) / GRID_LINES;
            let color = if step == 0 { AXIS } else { GRID };
            hline(&mut image, plot.left, plot.right, y, color);
        }
        vline(&mut image, plot.left, plot.top, plot.bottom, AXIS);

        let count = u32::try_from(bars.len()).unwrap_or(u32::MAX);
        let slot = (plot.width() / count).max(1);
        let bar_width = (slot * 3 / 5).max(1);
        for (idx, (_, value)) in (0u32..).zip(&bars) {
            let left = plot.left + idx * slot + (slot - bar_width) / 2;
            let scaled = (value / axis_max * f64::from(plot.height())).round();
            let bar_height = clamp_to_u32(scaled).min(plot.height());
            fill_rect(
                &mut image,
                left,
                plot.bottom - bar_height,
                bar_width,
                bar_height,
                BAR_COLOR,
            );
        }

        let legend = bars
            .iter()
            .map(|(label, value)| LegendEntry {
                label: (*label).clone(),
                color: BAR_COLOR,
                value: format!("{value:.1}h"),
            })
            .collect();

        Chart {
            title: HOURS_CHART_TITLE.to_string(),
            image,
            legend,
            axis_max: Some(axis_max),
        }
    }

    /// Empty frame used when there is nothing to plot.
    fn placeholder(&self, title: &str) -> Chart {
        let mut image = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let (right, bottom) = (self.width - 1, self.height - 1);
        hline(&mut image, 0, right, 0, PLACEHOLDER);
        hline(&mut image, 0, right, bottom, PLACEHOLDER);
        vline(&mut image, 0, 0, bottom, PLACEHOLDER);
        vline(&mut image, right, 0, bottom, PLACEHOLDER);
        Chart {
            title: title.to_string(),
            image,
            legend: Vec::new(),
            axis_max: None,
        }
    }
}

/// Round `max` up to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn axis_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(exponent(max));
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
}

impl PlotArea {
    fn within(width: u32, height: u32) -> Self {
        let left = (width / 12).min(width.saturating_sub(2));
        let top = (height / 20).min(height.saturating_sub(2));
        Self {
            left,
            right: width.saturating_sub(width / 30).saturating_sub(1).max(left + 1),
            top,
            bottom: height.saturating_sub(height / 10).saturating_sub(1).max(top + 1),
        }
    }

    const fn width(&self) -> u32 {
        self.right - self.left
    }

    const fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[allow(clippy::cast_possible_truncation)]
fn exponent(value: f64) -> i32 {
    value.log10().floor() as i32
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u32(value: f64) -> u32 {
    value.clamp(0.0, f64::from(u32::MAX)) as u32
}

fn hline(image: &mut RgbImage, x0: u32, x1: u32, y: u32, color: Rgb<u8>) {
    if y >= image.height() {
        return;
    }
    for x in x0..=x1.min(image.width() - 1) {
        image.put_pixel(x, y, color);
    }
}

fn vline(image: &mut RgbImage, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    if x >= image.width() {
        return;
    }
    for y in y0..=y1.min(image.height() - 1) {
        image.put_pixel(x, y, color);
    }
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(image.width());
    let y_end = y.saturating_add(height).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}
