// File: crates/gw-figures/src/cli.rs
// Summary: Command-line flags; every flag overrides the matching config file value.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "gw-figures", version, about = "Render Nintendo Game & Watch dataset figures to PNG")]
pub struct Cli {
    /// TOML config file (defaults to ./gw-figures.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV dataset to load
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Directory the PNG figures are written to
    #[arg(short = 'o', long)]
    pub figures_dir: Option<PathBuf>,

    /// Only plot releases up to and including this year
    #[arg(long)]
    pub max_release_year: Option<i32>,

    /// Timeline label levels: generated (auto) or the hand-tuned table (manual)
    #[arg(long, value_name = "auto|manual")]
    pub levels: Option<String>,

    /// Theme preset (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Bar coloring: by-series or uniform
    #[arg(long, value_name = "by-series|uniform")]
    pub color_mode: Option<String>,

    /// Figure to render; repeat for several (games-produced, games-released,
    /// series-released, timeline, distribution:<column>)
    #[arg(short, long = "figure")]
    pub figures: Vec<String>,

    /// Skip all text (deterministic output regardless of installed fonts)
    #[arg(long)]
    pub no_labels: bool,
}
