// File: crates/gw-core/src/bar.rs
// Summary: Categorical bar chart model and its painter.

use skia_safe as skia;

use crate::axis::Axis;
use crate::chart::{draw_legend, Frame, LegendCorner, LegendEntry};
use crate::geometry::PlotRect;
use crate::scale::{BandScale, LinearScale};
use crate::text::Align;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Theme bar color when `None`.
    pub color: Option<skia::Color>,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    pub title: String,
    pub title_size: f32,
    pub x_label: String,
    /// Value axis; `min` is the baseline bars grow from.
    pub y_axis: Axis,
    pub bars: Vec<Bar>,
    /// Draw category labels rotated 90 degrees.
    pub rotate_labels: bool,
    pub legend: Vec<LegendEntry>,
    /// Top-right corner of the legend as fractions of the plot area.
    pub legend_at: (f32, f32),
}

impl BarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_axis: Axis) -> Self {
        Self {
            title: title.into(),
            title_size: 14.0,
            x_label: x_label.into(),
            y_axis,
            bars: Vec::new(),
            rotate_labels: false,
            legend: Vec::new(),
            legend_at: (1.0, 0.0),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64, color: Option<skia::Color>) {
        self.bars.push(Bar { label: label.into(), value, color });
    }
}

const TICK_FONT: f32 = 8.0;
const AXIS_FONT: f32 = 11.0;
/// Fraction of each band covered by its bar.
const BAR_FILL: f32 = 0.8;

pub(crate) fn draw(frame: &Frame<'_>, chart: &BarChart, plot: PlotRect) {
    let theme = frame.theme;
    let ys = LinearScale::new(chart.y_axis.min, chart.y_axis.max, plot.bottom, plot.top);
    let xs = BandScale::new(chart.bars.len(), plot.left, plot.right, BAR_FILL);

    // Grid below bars
    let ticks = chart.y_axis.ticks(8);
    for &v in &ticks {
        let y = ys.to_px(v);
        frame.line((plot.left, y), (plot.right, y), theme.grid, 1.0);
    }

    // Bars
    let half = xs.bar_width() * 0.5;
    for (i, b) in chart.bars.iter().enumerate() {
        let cx = xs.center(i);
        let top = ys.to_px(b.value.max(chart.y_axis.min));
        frame.rect(cx - half, top, cx + half, plot.bottom, b.color.unwrap_or(theme.bar));
    }

    // Only the bottom spine is shown.
    frame.line((plot.left, plot.bottom), (plot.right, plot.bottom), theme.spine, 1.0);

    // Tick labels
    for &v in &ticks {
        frame.label(&chart.y_axis.tick_label(v), plot.left - 6.0, ys.to_px(v), TICK_FONT, theme.tick, Align::Right);
    }
    let mut label_depth: f32 = 12.0;
    for (i, b) in chart.bars.iter().enumerate() {
        let cx = xs.center(i);
        if chart.rotate_labels {
            frame.vertical_label(&b.label, cx, plot.bottom + 6.0, TICK_FONT, theme.tick);
            label_depth = label_depth.max(frame.text_width(&b.label, TICK_FONT) + 6.0);
        } else {
            frame.label(&b.label, cx, plot.bottom + 12.0, TICK_FONT, theme.tick, Align::Center);
        }
    }

    // Axis titles
    frame.label(&chart.x_label, plot.center_x(), plot.bottom + label_depth + 22.0, AXIS_FONT, theme.axis_label, Align::Center);
    let y_label_w = frame.text_width(&chart.y_axis.label, AXIS_FONT);
    let y_mid = (plot.top + plot.bottom) * 0.5;
    frame.vertical_label(&chart.y_axis.label, plot.left - 50.0, y_mid - y_label_w * 0.5, AXIS_FONT, theme.axis_label);

    // Title, left-aligned above the plot
    frame.title(&chart.title, plot.left, plot.top - chart.title_size - 16.0, chart.title_size, Align::Left);

    let anchor = (
        plot.left + plot.width() * chart.legend_at.0,
        plot.top + plot.height() * chart.legend_at.1,
    );
    draw_legend(frame, "Series", &chart.legend, anchor, LegendCorner::TopRight);
}
