// File: crates/gw-core/src/lib.rs
// Summary: Core library entry point; dataset loading, aggregation and figure rendering for Game & Watch data.

pub mod error;
pub mod dataset;
pub mod aggregate;
pub mod stats;
pub mod levels;
pub mod format;
pub mod palette;
pub mod theme;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod axis;
pub mod scale;
pub mod text;
pub mod chart;
pub mod bar;
pub mod timeline;
pub mod distribution;
pub mod figures;
pub mod pipeline;

pub use error::{DataError, Error, RenderError, Result};
pub use dataset::{Dataset, DeviceRecord};
pub use aggregate::{aggregate, count_by_year, production, series_summary, GroupBy, GroupKey, SeriesSummary};
pub use levels::LevelMode;
pub use palette::{ColorMode, Palette};
pub use theme::Theme;
pub use axis::Axis;
pub use chart::{Chart, ChartKind, LegendEntry, RenderOptions};
pub use bar::BarChart;
pub use timeline::{Timeline, TimelineEvent};
pub use distribution::Distribution;
pub use figures::{Figure, FigureOptions, NumericColumn};
pub use pipeline::{Pipeline, PipelineOptions, PipelineReport};
