// File: crates/gw-figures/src/main.rs
// Summary: Loads the Game & Watch CSV, logs the aggregated views and renders the figures to PNGs.

mod cli;
mod config;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use gw_core::Pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::resolve(&cli)?;
    let opts = config.into_pipeline_options(chrono::Local::now().year())?;
    info!(dataset = %opts.dataset.display(), figures_dir = %opts.figures_dir.display(), "starting");

    let report = Pipeline::run(&opts)
        .with_context(|| format!("failed to produce figures from '{}'", opts.dataset.display()))?;

    info!(records = report.records, "dataset summary");
    for (year, games) in &report.by_year {
        info!(year, games, "released per year");
    }
    for s in &report.by_series {
        info!(series = %s.series, from = s.first_year, to = s.last_year, games = s.games, "released per series");
    }
    for path in &report.written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
