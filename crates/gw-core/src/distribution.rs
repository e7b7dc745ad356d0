// File: crates/gw-core/src/distribution.rs
// Summary: Histogram + box plot pair for spotting outliers in one numeric column.

use crate::axis::Axis;
use crate::chart::{fill, stroke, Frame};
use crate::format::TickFormat;
use crate::geometry::PlotRect;
use crate::scale::LinearScale;
use crate::stats::{histogram, sturges_bins, Bin, Summary};
use crate::text::Align;

#[derive(Clone, Debug)]
pub struct Distribution {
    pub column: String,
    pub bins: Vec<Bin>,
    pub summary: Summary,
    /// Format of value ticks; large quantities are abbreviated.
    pub format: TickFormat,
}

impl Distribution {
    /// `None` when `values` holds no finite number.
    pub fn new(column: impl Into<String>, values: &[f64]) -> Option<Self> {
        let summary = Summary::of(values)?;
        let bins = histogram(values, sturges_bins(summary.count));
        let format = if summary.max >= 1e5 { TickFormat::Abbreviated } else { TickFormat::Plain };
        Some(Self { column: column.into(), bins, summary, format })
    }
}

const TITLE_FONT: f32 = 12.0;
const TICK_FONT: f32 = 9.0;
const AXIS_FONT: f32 = 10.0;
const PANEL_GAP: f32 = 80.0;

pub(crate) fn draw(frame: &Frame<'_>, d: &Distribution, plot: PlotRect) {
    let panels = plot.columns(2, PANEL_GAP);
    draw_histogram(frame, d, panels[0]);
    draw_box(frame, d, panels[1]);
}

fn draw_histogram(frame: &Frame<'_>, d: &Distribution, p: PlotRect) {
    let theme = frame.theme;
    let (Some(first), Some(last)) = (d.bins.first(), d.bins.last()) else { return };
    let max_count = d.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let x_axis = Axis::new(d.column.as_str(), first.start, last.end).with_format(d.format);
    let y_axis = Axis::new("Count", 0.0, max_count.max(1.0));
    let xs = LinearScale::new(x_axis.min, x_axis.max, p.left, p.right);
    let ys = LinearScale::new(y_axis.min, y_axis.max, p.bottom, p.top);

    let edge = stroke(theme.background, 1.0);
    for b in &d.bins {
        let rect = skia_safe::Rect::from_ltrb(xs.to_px(b.start), ys.to_px(b.count as f64), xs.to_px(b.end), p.bottom);
        frame.canvas.draw_rect(rect, &fill(theme.bar));
        frame.canvas.draw_rect(rect, &edge);
    }
    draw_frame_axes(frame, p, &x_axis, &xs);
    for v in y_axis.ticks(5) {
        let y = ys.to_px(v);
        frame.line((p.left - 4.0, y), (p.left, y), theme.tick, 1.0);
        frame.label(&y_axis.tick_label(v), p.left - 7.0, y, TICK_FONT, theme.tick, Align::Right);
    }
    let w = frame.text_width(&y_axis.label, AXIS_FONT);
    frame.vertical_label(&y_axis.label, p.left - 44.0, (p.top + p.bottom - w) * 0.5, AXIS_FONT, theme.axis_label);
    frame.title(&format!("Histogram of '{}'", d.column), p.center_x(), p.top - 18.0, TITLE_FONT, Align::Center);
}

fn draw_box(frame: &Frame<'_>, d: &Distribution, p: PlotRect) {
    let theme = frame.theme;
    let s = &d.summary;
    let pad = ((s.max - s.min) * 0.05).max(0.5);
    let x_axis = Axis::new(d.column.as_str(), s.min - pad, s.max + pad).with_format(d.format);
    let xs = LinearScale::new(x_axis.min, x_axis.max, p.left, p.right);
    let cy = (p.top + p.bottom) * 0.5;
    let half = p.height() * 0.2;

    let line = stroke(theme.box_line, 1.5);
    // Whiskers and caps
    let (wl, wh) = (xs.to_px(s.whisker_low), xs.to_px(s.whisker_high));
    let (q1, q3) = (xs.to_px(s.q1), xs.to_px(s.q3));
    frame.canvas.draw_line((wl, cy), (q1, cy), &line);
    frame.canvas.draw_line((q3, cy), (wh, cy), &line);
    frame.canvas.draw_line((wl, cy - half * 0.5), (wl, cy + half * 0.5), &line);
    frame.canvas.draw_line((wh, cy - half * 0.5), (wh, cy + half * 0.5), &line);

    // Box and median
    let rect = skia_safe::Rect::from_ltrb(q1, cy - half, q3.max(q1 + 1.0), cy + half);
    frame.canvas.draw_rect(rect, &fill(theme.box_fill));
    frame.canvas.draw_rect(rect, &line);
    let m = xs.to_px(s.median);
    frame.canvas.draw_line((m, cy - half), (m, cy + half), &line);

    let flier = stroke(theme.box_line, 1.0);
    for &o in &s.outliers {
        frame.canvas.draw_circle((xs.to_px(o), cy), 2.0, &flier);
    }

    draw_frame_axes(frame, p, &x_axis, &xs);
    frame.title(&format!("Box plot of '{}'", d.column), p.center_x(), p.top - 18.0, TITLE_FONT, Align::Center);
}

/// Left/bottom spines, x ticks and the x axis title.
fn draw_frame_axes(frame: &Frame<'_>, p: PlotRect, x_axis: &Axis, xs: &LinearScale) {
    let theme = frame.theme;
    frame.line((p.left, p.top), (p.left, p.bottom), theme.tick, 1.0);
    frame.line((p.left, p.bottom), (p.right, p.bottom), theme.tick, 1.0);
    for v in x_axis.ticks(5) {
        let x = xs.to_px(v);
        frame.line((x, p.bottom), (x, p.bottom + 4.0), theme.tick, 1.0);
        frame.label(&x_axis.tick_label(v), x, p.bottom + 13.0, TICK_FONT, theme.tick, Align::Center);
    }
    frame.label(&x_axis.label, p.center_x(), p.bottom + 34.0, AXIS_FONT, theme.axis_label, Align::Center);
}
