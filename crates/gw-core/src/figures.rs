// File: crates/gw-core/src/figures.rs
// Summary: Builds the Game & Watch figures (production, releases, series, timeline, distribution) from a dataset.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::aggregate::{count_by_year, production, series_summary};
use crate::axis::Axis;
use crate::bar::BarChart;
use crate::chart::{Chart, LegendEntry};
use crate::dataset::{normalize_header, Dataset};
use crate::distribution::Distribution;
use crate::error::DataError;
use crate::format::{timeline_label, TickFormat};
use crate::levels::{levels_for, LevelMode};
use crate::palette::{ColorMode, Palette};
use crate::timeline::{Timeline, TimelineEvent};

/// Headroom added above the tallest production bar.
const PRODUCED_HEADROOM: f64 = 200_000.0;
const FILE_PREFIX: &str = "nintendo_game_and_watch";

/// Numeric columns a distribution figure can summarize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericColumn {
    Produced,
    Year,
    ReleaseOrder,
}

impl NumericColumn {
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Produced => "produced",
            NumericColumn::Year => "year",
            NumericColumn::ReleaseOrder => "release order",
        }
    }

    /// Values of this column; records without a value are skipped.
    pub fn values(self, ds: &Dataset) -> Vec<f64> {
        ds.records()
            .iter()
            .filter_map(|r| match self {
                NumericColumn::Produced => r.produced.map(|p| p as f64),
                NumericColumn::Year => Some(r.year() as f64),
                NumericColumn::ReleaseOrder => Some(r.release_order as f64),
            })
            .collect()
    }
}

impl FromStr for NumericColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_header(s).as_str() {
            "produced" => Ok(Self::Produced),
            "year" => Ok(Self::Year),
            "release order" => Ok(Self::ReleaseOrder),
            other => Err(format!("no numeric column '{other}' (expected produced|year|release-order)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Figure {
    GamesProduced,
    GamesReleased,
    SeriesReleased,
    Timeline,
    Distribution(NumericColumn),
}

impl Figure {
    /// Figures rendered when none are requested explicitly.
    pub const DEFAULT: [Figure; 4] = [
        Figure::GamesProduced,
        Figure::GamesReleased,
        Figure::SeriesReleased,
        Figure::Timeline,
    ];

    pub fn file_name(&self) -> String {
        match self {
            Figure::GamesProduced => format!("{FILE_PREFIX}_games_produced.png"),
            Figure::GamesReleased => format!("{FILE_PREFIX}_games_released.png"),
            Figure::SeriesReleased => format!("{FILE_PREFIX}_series_released.png"),
            Figure::Timeline => format!("{FILE_PREFIX}_timeline.png"),
            Figure::Distribution(c) => format!("{FILE_PREFIX}_{}_distribution.png", c.name().replace(' ', "_")),
        }
    }

    pub fn build(&self, ds: &Dataset, opts: &FigureOptions) -> Result<Chart, DataError> {
        match self {
            Figure::GamesProduced => games_produced(ds, opts),
            Figure::GamesReleased => games_released(ds, opts),
            Figure::SeriesReleased => series_released(ds, opts),
            Figure::Timeline => timeline(ds, opts),
            Figure::Distribution(c) => distribution(&ds.up_to_year(opts.max_release_year), *c),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::GamesProduced => f.write_str("games-produced"),
            Figure::GamesReleased => f.write_str("games-released"),
            Figure::SeriesReleased => f.write_str("series-released"),
            Figure::Timeline => f.write_str("timeline"),
            Figure::Distribution(c) => write!(f, "distribution:{}", c.name().replace(' ', "-")),
        }
    }
}

impl FromStr for Figure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(col) = s.strip_prefix("distribution:") {
            return col.parse().map(Figure::Distribution);
        }
        match s.replace('_', "-").as_str() {
            "games-produced" => Ok(Figure::GamesProduced),
            "games-released" => Ok(Figure::GamesReleased),
            "series-released" => Ok(Figure::SeriesReleased),
            "timeline" => Ok(Figure::Timeline),
            other => Err(format!(
                "unknown figure '{other}' (expected games-produced|games-released|series-released|timeline|distribution:<column>)"
            )),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FigureOptions {
    /// Only releases up to and including this year are plotted.
    pub max_release_year: Option<i32>,
    pub levels: LevelMode,
    pub color_mode: ColorMode,
    pub palette: Palette,
    /// Footer for the timeline, e.g. a copyright notice.
    pub footer: Option<String>,
}

impl FigureOptions {
    fn bar_color(&self, series: &str) -> Option<skia_safe::Color> {
        match self.color_mode {
            ColorMode::BySeries => Some(self.palette.colors_for(series).label),
            ColorMode::Uniform => None,
        }
    }

    /// One warning per series without a palette entry; those are drawn in the fallback grey.
    fn warn_unknown<'a>(&self, series: impl IntoIterator<Item = &'a str>) {
        for s in self.palette.unknown(series) {
            warn!(series = s, "no palette entry; using fallback colors");
        }
    }

    /// Legend rows for `series` in the given order, skipping repeats.
    fn legend<'a>(&self, series: impl IntoIterator<Item = &'a str>) -> Vec<LegendEntry> {
        if self.color_mode == ColorMode::Uniform {
            return Vec::new();
        }
        let mut out: Vec<LegendEntry> = Vec::new();
        for s in series {
            if !out.iter().any(|e| e.label == s) {
                out.push(LegendEntry { label: s.to_string(), color: self.palette.colors_for(s).label });
            }
        }
        out
    }
}

/// Bar per game of units produced, colored by series.
pub fn games_produced(ds: &Dataset, opts: &FigureOptions) -> Result<Chart, DataError> {
    let entries = production(&ds.up_to_year(opts.max_release_year));
    let max = entries
        .iter()
        .map(|e| e.produced)
        .max()
        .ok_or_else(|| DataError::Empty("no record has a production quantity".into()))?;

    if opts.color_mode == ColorMode::BySeries {
        opts.warn_unknown(entries.iter().map(|e| e.series.as_str()));
    }
    let y_axis = Axis::new("Quantity", 0.0, max as f64 + PRODUCED_HEADROOM).with_format(TickFormat::Abbreviated);
    let mut chart = BarChart::new("Number of Nintendo Game & Watch Games Produced per Game", "Game", y_axis);
    chart.title_size = 20.0;
    chart.rotate_labels = true;
    chart.legend_at = (0.85, 0.05);
    for e in &entries {
        chart.push(e.label.clone(), e.produced as f64, opts.bar_color(&e.series));
    }
    chart.legend = opts.legend(entries.iter().map(|e| e.series.as_str()));
    Ok(Chart::Bar(chart))
}

/// Bar per year of games released.
pub fn games_released(ds: &Dataset, opts: &FigureOptions) -> Result<Chart, DataError> {
    let counts = count_by_year(&ds.up_to_year(opts.max_release_year));
    let max = counts
        .iter()
        .map(|&(_, n)| n)
        .max()
        .ok_or_else(|| DataError::Empty("no releases in range".into()))?;

    let y_axis = Axis::new("Quantity", 0.0, max as f64 + 1.0);
    let mut chart = BarChart::new("Number of Nintendo Game & Watch Games Released per Year", "Year", y_axis);
    for (year, n) in counts {
        chart.push(year.to_string(), n as f64, None);
    }
    Ok(Chart::Bar(chart))
}

/// Bar per series of games released, series ordered by first release.
pub fn series_released(ds: &Dataset, opts: &FigureOptions) -> Result<Chart, DataError> {
    let summary = series_summary(&ds.up_to_year(opts.max_release_year));
    let max = summary
        .iter()
        .map(|s| s.games)
        .max()
        .ok_or_else(|| DataError::Empty("no releases in range".into()))?;

    let y_axis = Axis::new("Quantity", 0.0, max as f64 + 1.0);
    if opts.color_mode == ColorMode::BySeries {
        opts.warn_unknown(summary.iter().map(|s| s.series.as_str()));
    }
    let mut chart = BarChart::new("Number of Nintendo Game & Watch Games Released per Series", "Series", y_axis);
    chart.rotate_labels = true;
    for s in &summary {
        chart.push(s.series.clone(), s.games as f64, opts.bar_color(&s.series));
    }
    Ok(Chart::Bar(chart))
}

/// Every release on a date axis, labels stacked by level.
pub fn timeline(ds: &Dataset, opts: &FigureOptions) -> Result<Chart, DataError> {
    let filtered = ds.up_to_year(opts.max_release_year);
    let mut records: Vec<_> = filtered.records().iter().collect();
    if records.is_empty() {
        return Err(DataError::Empty("no releases in range".into()));
    }
    records.sort_by_key(|r| r.release_order);

    let series: Vec<&str> = records.iter().map(|r| r.series.as_str()).collect();
    let levels = levels_for(opts.levels, &series)?;
    opts.warn_unknown(series.iter().copied());

    let events = records
        .iter()
        .zip(levels)
        .map(|(r, level)| {
            let colors = opts.palette.colors_for(&r.series);
            TimelineEvent {
                date: r.released,
                level,
                text: timeline_label(r.release_order, &r.game, &r.model),
                label_color: colors.label,
                text_color: colors.text,
            }
        })
        .collect();
    let legend = opts
        .palette
        .iter()
        .map(|(name, c)| LegendEntry { label: name.to_string(), color: c.label })
        .collect();

    Ok(Chart::Timeline(Timeline {
        title: "Timeless Classics: The Evolution of Nintendo Game & Watch".into(),
        events,
        legend,
        footer: opts.footer.clone(),
    }))
}

/// Histogram and box plot of one numeric column.
pub fn distribution(ds: &Dataset, column: NumericColumn) -> Result<Chart, DataError> {
    Distribution::new(column.name(), &column.values(ds))
        .map(Chart::Distribution)
        .ok_or_else(|| DataError::Empty(format!("column '{}' has no values", column.name())))
}
