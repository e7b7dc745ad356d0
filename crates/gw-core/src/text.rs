// File: crates/gw-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored, boxed and rotated labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its vertical middle at `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }

    /// Draw `text` on a filled box, left edge at `x`, vertically centered on `y`.
    /// Returns the box that was drawn.
    pub fn draw_boxed(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        fill: skia::Color,
        pad: f32,
    ) -> skia::Rect {
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        let rect = skia::Rect::from_ltrb(x, y - h * 0.5 - pad, x + w + pad * 2.0, y + h * 0.5 + pad);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(fill);
        canvas.draw_rect(rect, &paint);
        p.paint(canvas, (x + pad, y - h * 0.5));
        rect
    }

    /// Draw `text` rotated 90 degrees counter-clockwise so it reads bottom-to-top,
    /// its end at `top_y` and centered on `x`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, top_y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((x, top_y + w));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (0.0, -p.height() * 0.5));
        canvas.restore();
    }
}
