// File: crates/gw-core/src/types.rs
// Summary: Shared types and constants (figure sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 760;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 460;

/// Per-figure surface sizes (72 dpi, figure inches plus room for titles and labels).
pub const WIDE_BAR_SIZE: (i32, i32) = (1180, 720);
pub const TIMELINE_SIZE: (i32, i32) = (1900, 1180);
pub const DISTRIBUTION_SIZE: (i32, i32) = (900, 340);

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 36, 64, 64)
    }
}
