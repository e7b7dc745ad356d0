// File: crates/gw-core/src/timeline.rs
// Summary: Release timeline model and painter (date axis, stems, markers, boxed labels).

use chrono::{Datelike, NaiveDate};
use skia_safe as skia;

use crate::chart::{draw_legend, fill, stroke, Frame, LegendCorner, LegendEntry};
use crate::format::year_ticks;
use crate::geometry::PlotRect;
use crate::scale::{DateScale, LinearScale};
use crate::text::Align;

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEvent {
    pub date: NaiveDate,
    /// Signed label offset from the axis; positive is above.
    pub level: i32,
    pub text: String,
    pub label_color: skia::Color,
    pub text_color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    pub title: String,
    pub events: Vec<TimelineEvent>,
    pub legend: Vec<LegendEntry>,
    /// Small print in the lower-right corner, e.g. a copyright notice.
    pub footer: Option<String>,
}

impl Timeline {
    /// First and last year covered by the events.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.events.iter().map(|e| e.date.year()).min()?;
        let max = self.events.iter().map(|e| e.date.year()).max()?;
        Some((min, max))
    }
}

const TITLE_FONT: f32 = 30.0;
const YEAR_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 11.0;
const MARKER_RADIUS: f32 = 3.5;

pub(crate) fn draw(frame: &Frame<'_>, tl: &Timeline, plot: PlotRect) {
    let theme = frame.theme;
    frame.title(&tl.title, plot.center_x(), plot.top - 80.0, TITLE_FONT, Align::Center);

    let Some((min_year, max_year)) = tl.year_span() else { return };
    let years = year_ticks(min_year, max_year);
    let start = NaiveDate::from_ymd_opt(min_year, 1, 1).unwrap_or(NaiveDate::MIN);
    let end = NaiveDate::from_ymd_opt(max_year + 1, 1, 1).unwrap_or(NaiveDate::MAX);
    let xs = DateScale::new(start, end, plot.left, plot.right);

    // One spare level on each side keeps the outermost label boxes inside the plot.
    let lo = tl.events.iter().map(|e| e.level).min().unwrap_or(0).min(0) - 1;
    let hi = tl.events.iter().map(|e| e.level).max().unwrap_or(0).max(0) + 1;
    let ys = LinearScale::new(lo as f64, hi as f64, plot.bottom, plot.top);
    let y0 = ys.to_px(0.0);

    // Stems sit underneath the axis line.
    for e in &tl.events {
        let x = xs.to_px(e.date);
        frame.line((x, y0), (x, ys.to_px(e.level as f64)), theme.stem, 1.0);
    }

    frame.line((plot.left, y0), (plot.right, y0), theme.timeline_axis, 2.0);
    for &year in &years {
        let Some(d) = NaiveDate::from_ymd_opt(year, 1, 1) else { continue };
        let x = xs.to_px(d);
        frame.line((x, y0), (x, y0 + 6.0), theme.timeline_axis, 2.0);
        frame.label(&year.to_string(), x, y0 + 18.0, YEAR_FONT, theme.timeline_axis, Align::Center);
    }

    let marker_fill = fill(theme.marker_fill);
    let marker_edge = stroke(theme.stem, 1.5);
    for e in &tl.events {
        let x = xs.to_px(e.date);
        frame.canvas.draw_circle((x, y0), MARKER_RADIUS, &marker_fill);
        frame.canvas.draw_circle((x, y0), MARKER_RADIUS, &marker_edge);
    }

    for e in &tl.events {
        let x = xs.to_px(e.date);
        let y = ys.to_px(e.level as f64);
        match &frame.text {
            Some(t) => {
                t.draw_boxed(frame.canvas, &e.text, x, y, LABEL_FONT, e.text_color, e.label_color, 3.0);
            }
            None => {
                let w = frame.text_width(&e.text, LABEL_FONT);
                frame.rect(x, y - LABEL_FONT * 0.5 - 3.0, x + w + 6.0, y + LABEL_FONT * 0.5 + 3.0, e.label_color);
            }
        }
    }

    draw_legend(
        frame,
        "Series",
        &tl.legend,
        (plot.right, plot.bottom - plot.height() * 0.1),
        LegendCorner::BottomRight,
    );

    if let Some(footer) = &tl.footer {
        frame.label(footer, plot.right, plot.bottom + 30.0, 10.0, theme.axis_label, Align::Right);
    }
}
