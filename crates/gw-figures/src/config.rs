// File: crates/gw-figures/src/config.rs
// Summary: Layered configuration: defaults <- TOML file <- command-line flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use gw_core::format::copyright_notice;
use gw_core::palette::parse_hex;
use gw_core::{theme, ColorMode, Figure, FigureOptions, LevelMode, Palette, PipelineOptions};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

pub const DEFAULT_CONFIG: &str = "gw-figures.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dataset: PathBuf,
    pub figures_dir: PathBuf,
    pub max_release_year: Option<i32>,
    /// `auto` or `manual`
    pub levels: String,
    pub theme: String,
    /// `by-series` or `uniform`
    pub color_mode: String,
    pub figures: Vec<String>,
    pub draw_labels: bool,
    /// Adds a "(c) <year> <holder>" footer to the timeline.
    pub copyright_holder: Option<String>,
    /// Series name -> `#RRGGBB` label color overrides.
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = PipelineOptions::default();
        Self {
            dataset: defaults.dataset,
            figures_dir: defaults.figures_dir,
            max_release_year: None,
            levels: "auto".into(),
            theme: defaults.theme.name.into(),
            color_mode: "by-series".into(),
            figures: defaults.figures.iter().map(|f| f.to_string()).collect(),
            draw_labels: true,
            copyright_holder: None,
            palette: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config '{}'", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config '{}'", path.display()))
    }

    /// Explicit `--config`, else `./gw-figures.toml` if it exists, else defaults; then CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with_default(cli, Path::new(DEFAULT_CONFIG))
    }

    /// [`resolve`](Self::resolve) with `default_path` standing in for `./gw-figures.toml`.
    pub fn resolve_with_default(cli: &Cli, default_path: &Path) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None if default_path.exists() => Self::load(default_path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(p) = &cli.dataset {
            self.dataset = p.clone();
        }
        if let Some(p) = &cli.figures_dir {
            self.figures_dir = p.clone();
        }
        if cli.max_release_year.is_some() {
            self.max_release_year = cli.max_release_year;
        }
        if let Some(l) = &cli.levels {
            self.levels = l.clone();
        }
        if let Some(t) = &cli.theme {
            self.theme = t.clone();
        }
        if let Some(c) = &cli.color_mode {
            self.color_mode = c.clone();
        }
        if !cli.figures.is_empty() {
            self.figures = cli.figures.clone();
        }
        if cli.no_labels {
            self.draw_labels = false;
        }
    }

    /// Validate and convert into pipeline options; `year` stamps the copyright footer.
    pub fn into_pipeline_options(self, year: i32) -> Result<PipelineOptions> {
        let levels: LevelMode = self.levels.parse().map_err(|e: String| anyhow!(e))?;
        let color_mode: ColorMode = self.color_mode.parse().map_err(|e: String| anyhow!(e))?;
        let figures = self
            .figures
            .iter()
            .map(|f| f.parse::<Figure>().map_err(|e| anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;

        let mut palette = Palette::game_and_watch();
        for (series, hex) in &self.palette {
            let color = parse_hex(hex).ok_or_else(|| anyhow!("palette entry '{series}': '{hex}' is not #RRGGBB"))?;
            palette.set_label_color(series, color);
        }

        Ok(PipelineOptions {
            dataset: self.dataset,
            figures_dir: self.figures_dir,
            figures,
            figure: FigureOptions {
                max_release_year: self.max_release_year,
                levels,
                color_mode,
                palette,
                footer: self.copyright_holder.map(|h| copyright_notice(year, &h)),
            },
            theme: theme::find(&self.theme),
            draw_labels: self.draw_labels,
        })
    }
}
