// File: crates/gw-core/src/pipeline.rs
// Summary: One-shot driver: load the dataset, compute the aggregated views, render each figure.

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::{count_by_year, series_summary, SeriesSummary};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::figures::{Figure, FigureOptions};
use crate::theme::Theme;

#[derive(Clone, Debug)]
pub struct PipelineOptions {
    pub dataset: PathBuf,
    pub figures_dir: PathBuf,
    pub figures: Vec<Figure>,
    pub figure: FigureOptions,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/nintendo_game_and_watch_games.csv"),
            figures_dir: PathBuf::from("figures"),
            figures: Figure::DEFAULT.to_vec(),
            figure: FigureOptions::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// What a run computed and wrote.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineReport {
    pub records: usize,
    pub by_year: Vec<(i32, usize)>,
    pub by_series: Vec<SeriesSummary>,
    pub written: Vec<PathBuf>,
}

pub struct Pipeline;

impl Pipeline {
    /// Run load -> aggregate -> render. Stops at the first error.
    pub fn run(opts: &PipelineOptions) -> Result<PipelineReport> {
        let ds = Dataset::load_csv(&opts.dataset)?;
        Self::run_with(&ds, opts)
    }

    /// Same as [`run`](Self::run) on an already loaded dataset.
    pub fn run_with(ds: &Dataset, opts: &PipelineOptions) -> Result<PipelineReport> {
        let in_range = ds.up_to_year(opts.figure.max_release_year);
        let by_year = count_by_year(&in_range);
        let by_series = series_summary(&in_range);
        info!(records = in_range.len(), years = by_year.len(), series = by_series.len(), "aggregated dataset");

        let mut written = Vec::with_capacity(opts.figures.len());
        for figure in &opts.figures {
            let chart = figure.build(ds, &opts.figure)?;
            let render = chart
                .default_options()
                .with_theme(opts.theme)
                .with_labels(opts.draw_labels);
            let path = opts.figures_dir.join(figure.file_name());
            chart.render_to_png(&render, &path)?;
            info!(figure = %figure, path = %path.display(), "saved figure");
            written.push(path);
        }

        Ok(PipelineReport { records: in_range.len(), by_year, by_series, written })
    }
}
