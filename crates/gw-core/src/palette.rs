// File: crates/gw-core/src/palette.rs
// Summary: Game & Watch series colors (label fill + contrasting text) and hex parsing.

use skia_safe as skia;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesColors {
    /// Fill used for bars, legend swatches and timeline label boxes.
    pub label: skia::Color,
    /// Text drawn on top of `label`.
    pub text: skia::Color,
}

/// How bars are colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Each bar takes its series' label color.
    #[default]
    BySeries,
    /// Every bar uses the theme's default bar color.
    Uniform,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "byseries" | "series" => Ok(Self::BySeries),
            "uniform" => Ok(Self::Uniform),
            other => Err(format!("unknown color mode '{other}' (expected by-series|uniform)")),
        }
    }
}

// (series, label color, text color), in canonical legend order.
const GAME_AND_WATCH: [(&str, &str, &str); 13] = [
    ("Silver", "#C0C0C0", "#FFFFFF"),
    ("Gold", "#FFD700", "#131515"),
    ("Wide Screen", "#D7CA7C", "#46422C"),
    ("Multi Screen", "#FF5F00", "#FFFFFF"),
    ("New Wide Screen", "#3C7E72", "#FFFFFF"),
    ("Table Top", "#FFFAC8", "#6E4931"),
    ("Panorama Screen", "#BA46DC", "#FFFFFF"),
    ("Super Color", "#000000", "#FFFFFF"),
    ("Micro VS. System", "#E6194B", "#FFFFFF"),
    ("Crystal Screen", "#275A76", "#FFFFFF"),
    ("Special Edition", "#FFE119", "#131515"),
    ("Reissue", "#B73E38", "#FFFFFF"),
    ("Colour Screen", "#3CB44B", "#FFFFFF"),
];

const FALLBACK: SeriesColors = SeriesColors {
    label: skia::Color::new(0xFF80_8080),
    text: skia::Color::WHITE,
};

/// Ordered series -> colors table.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<(String, SeriesColors)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::game_and_watch()
    }
}

impl Palette {
    pub fn game_and_watch() -> Self {
        let entries = GAME_AND_WATCH
            .iter()
            .filter_map(|&(name, label, text)| {
                Some((name.to_string(), SeriesColors { label: parse_hex(label)?, text: parse_hex(text)? }))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, series: &str) -> Option<SeriesColors> {
        self.entries.iter().find(|(n, _)| n.eq_ignore_ascii_case(series)).map(|(_, c)| *c)
    }

    /// Colors for `series`, or a neutral grey when the series is unknown.
    pub fn colors_for(&self, series: &str) -> SeriesColors {
        self.get(series).unwrap_or_else(|| {
            debug!(series, "no palette entry; using fallback colors");
            FALLBACK
        })
    }

    /// Distinct names in `series` that have no palette entry, in first-seen order.
    pub fn unknown<'a>(&self, series: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for s in series {
            if self.get(s).is_none() && !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }

    /// Replace (or append) the label color of `series`, keeping its text color.
    pub fn set_label_color(&mut self, series: &str, label: skia::Color) {
        match self.entries.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(series)) {
            Some((_, c)) => c.label = label,
            None => self.entries.push((series.to_string(), SeriesColors { label, text: contrasting_text(label) })),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SeriesColors)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into an opaque color.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(skia::Color::new(0xFF00_0000 | rgb))
}

/// Black or white, whichever reads better on `bg` (Rec. 601 luma).
pub fn contrasting_text(bg: skia::Color) -> skia::Color {
    let luma = 0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
    if luma > 150.0 { skia::Color::BLACK } else { skia::Color::WHITE }
}
