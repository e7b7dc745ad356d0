// File: crates/gw-core/src/chart.rs
// Summary: Chart model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::bar::{self, BarChart};
use crate::distribution::{self, Distribution};
use crate::error::RenderError;
use crate::geometry::PlotRect;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::timeline::{self, Timeline};
use crate::types::{Insets, DISTRIBUTION_SIZE, HEIGHT, TIMELINE_SIZE, WIDE_BAR_SIZE, WIDTH};

/// The enumerated chart types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Timeline,
    Distribution,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn, which keeps pixels identical across font setups.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }
}

/// A legend row: colored swatch plus label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub enum Chart {
    Bar(BarChart),
    Timeline(Timeline),
    Distribution(Distribution),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Bar(_) => ChartKind::Bar,
            Chart::Timeline(_) => ChartKind::Timeline,
            Chart::Distribution(_) => ChartKind::Distribution,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::Timeline(c) => &c.title,
            Chart::Distribution(c) => &c.column,
        }
    }

    /// Figure size and margins suited to this chart.
    pub fn default_options(&self) -> RenderOptions {
        let ((width, height), insets) = match self {
            Chart::Bar(c) if c.rotate_labels && c.bars.len() > 20 => (WIDE_BAR_SIZE, Insets::new(90, 40, 80, 210)),
            Chart::Bar(c) if c.rotate_labels => ((WIDTH, HEIGHT + 80), Insets::new(80, 36, 70, 170)),
            Chart::Bar(_) => ((WIDTH, HEIGHT), Insets::new(80, 36, 70, 70)),
            Chart::Timeline(_) => (TIMELINE_SIZE, Insets::new(60, 60, 140, 60)),
            Chart::Distribution(_) => (DISTRIBUTION_SIZE, Insets::new(70, 30, 56, 64)),
        };
        RenderOptions { width, height, insets, ..RenderOptions::default() }
    }

    /// Render into a CPU raster surface.
    fn paint_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        {
            let canvas = surface.canvas();

            // Background
            canvas.clear(opts.theme.background);

            let frame = Frame {
                canvas,
                theme: &opts.theme,
                text: opts.draw_labels.then(TextShaper::new),
            };
            let plot = PlotRect::inset(opts.width, opts.height, &opts.insets);

            match self {
                Chart::Bar(c) => bar::draw(&frame, c, plot),
                Chart::Timeline(c) => timeline::draw(&frame, c, plot),
                Chart::Distribution(c) => distribution::draw(&frame, c, plot),
            }
        }
        Ok(surface)
    }

    /// Render to an RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = self.paint_surface(opts)?;
        let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Encode);
        }
        Ok((pixels, w, h, stride))
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.paint_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, &bytes).map_err(io_err)?;
        debug!(path = %path.display(), bytes = bytes.len(), kind = ?self.kind(), "wrote figure");
        Ok(())
    }
}

// ---- shared drawing helpers --------------------------------------------------

/// Everything a chart needs while painting one surface.
pub(crate) struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    pub theme: &'a Theme,
    /// `None` when labels are disabled.
    pub text: Option<TextShaper>,
}

impl Frame<'_> {
    pub fn label(&self, s: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        if let Some(t) = &self.text {
            t.draw(self.canvas, s, x, y, size, color, align);
        }
    }

    pub fn title(&self, s: &str, x: f32, y: f32, size: f32, align: Align) {
        if let Some(t) = &self.text {
            t.draw(self.canvas, s, x, y, size, self.theme.title, align);
        }
    }

    pub fn vertical_label(&self, s: &str, x: f32, top_y: f32, size: f32, color: skia::Color) {
        if let Some(t) = &self.text {
            t.draw_vertical(self.canvas, s, x, top_y, size, color);
        }
    }

    /// Width of `s`; a per-character estimate when labels are disabled.
    pub fn text_width(&self, s: &str, size: f32) -> f32 {
        match &self.text {
            Some(t) => t.measure_width(s, size),
            None => s.chars().count() as f32 * size * 0.55,
        }
    }

    pub fn line(&self, from: (f32, f32), to: (f32, f32), color: skia::Color, width: f32) {
        self.canvas.draw_line(from, to, &stroke(color, width));
    }

    pub fn rect(&self, l: f32, t: f32, r: f32, b: f32, color: skia::Color) {
        self.canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &fill(color));
    }
}

pub(crate) fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub(crate) fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Which corner of the legend box sits on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    TopRight,
    BottomRight,
}

const LEGEND_FONT: f32 = 12.0;
const LEGEND_ROW: f32 = 20.0;
const LEGEND_PAD: f32 = 16.0;
const SWATCH_W: f32 = 26.0;

/// Framed legend with a title row and one swatch per entry.
pub(crate) fn draw_legend(frame: &Frame<'_>, title: &str, entries: &[LegendEntry], anchor: (f32, f32), corner: LegendCorner) {
    if entries.is_empty() {
        return;
    }
    let label_w = entries
        .iter()
        .map(|e| frame.text_width(&e.label, LEGEND_FONT))
        .fold(frame.text_width(title, LEGEND_FONT + 2.0), f32::max);
    let w = LEGEND_PAD * 2.0 + SWATCH_W + 8.0 + label_w;
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * (entries.len() + 1) as f32;
    let (right, top) = match corner {
        LegendCorner::TopRight => (anchor.0, anchor.1),
        LegendCorner::BottomRight => (anchor.0, anchor.1 - h),
    };
    let left = right - w;

    let rect = skia::Rect::from_ltrb(left, top, right, top + h);
    let mut bg = fill(frame.theme.background);
    bg.set_alpha_f(0.85);
    frame.canvas.draw_round_rect(rect, 4.0, 4.0, &bg);
    frame.canvas.draw_round_rect(rect, 4.0, 4.0, &stroke(frame.theme.legend_frame, 1.0));

    let x0 = left + LEGEND_PAD;
    let mut y = top + LEGEND_PAD + LEGEND_ROW * 0.5;
    frame.label(title, x0, y, LEGEND_FONT + 2.0, frame.theme.axis_label, Align::Left);
    for e in entries {
        y += LEGEND_ROW;
        frame.rect(x0, y - 5.0, x0 + SWATCH_W, y + 5.0, e.color);
        frame.label(&e.label, x0 + SWATCH_W + 8.0, y, LEGEND_FONT, frame.theme.axis_label, Align::Left);
    }
}
