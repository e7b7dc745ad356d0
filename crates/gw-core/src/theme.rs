// File: crates/gw-core/src/theme.rs
// Summary: Light/Dark theming for figure colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    /// Bottom spine of bar charts.
    pub spine: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Bar color when bars are not colored by series.
    pub bar: skia::Color,
    pub timeline_axis: skia::Color,
    pub stem: skia::Color,
    pub marker_fill: skia::Color,
    pub legend_frame: skia::Color,
    pub box_fill: skia::Color,
    pub box_line: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_rgb(0xF0, 0xF0, 0xF0),
            spine: skia::Color::from_rgb(0xF0, 0xF0, 0xF0),
            title: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::from_rgb(0x26, 0x26, 0x26),
            bar: skia::Color::from_rgb(0x1F, 0x77, 0xB4),
            timeline_axis: skia::Color::BLACK,
            stem: skia::Color::from_rgb(0xBB, 0xBB, 0xBB),
            marker_fill: skia::Color::WHITE,
            legend_frame: skia::Color::from_rgb(0xD0, 0xD0, 0xD0),
            box_fill: skia::Color::from_rgb(0x1F, 0x77, 0xB4),
            box_line: skia::Color::from_rgb(0x3F, 0x3F, 0x3F),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            spine: skia::Color::from_argb(255, 70, 70, 78),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar: skia::Color::from_argb(255, 64, 160, 255),
            timeline_axis: skia::Color::from_argb(255, 210, 210, 220),
            stem: skia::Color::from_argb(255, 110, 110, 120),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            legend_frame: skia::Color::from_argb(255, 70, 70, 78),
            box_fill: skia::Color::from_argb(255, 64, 160, 255),
            box_line: skia::Color::from_argb(255, 200, 200, 210),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
