// File: crates/gw-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Plot area in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Surface minus insets; never inverted even when the insets exceed the surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    /// Split horizontally into `n` equal panels separated by `gap` pixels.
    pub fn columns(&self, n: usize, gap: f32) -> Vec<PlotRect> {
        let n = n.max(1);
        let w = (self.width() - gap * (n - 1) as f32) / n as f32;
        (0..n)
            .map(|i| {
                let l = self.left + i as f32 * (w + gap);
                PlotRect::from_ltrb(l, self.top, l + w, self.bottom)
            })
            .collect()
    }
}
