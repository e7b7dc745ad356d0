// File: crates/gw-core/src/error.rs
// Summary: Error taxonomy: DataError for bad/missing input, RenderError for surface/encode/write failures.

use std::path::PathBuf;

/// Problems with the input dataset or with data handed to a figure builder.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot open dataset '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("line {line}: column '{column}' has invalid value '{value}': {reason}")]
    InvalidField {
        line: u64,
        column: String,
        value: String,
        reason: String,
    },
    #[error("line {line}: column '{column}' is empty")]
    EmptyField { line: u64, column: String },
    #[error("nothing to plot: {0}")]
    Empty(String),
    #[error("manual timeline levels cover {available} releases, got {requested}")]
    TooManyForManualLevels { requested: usize, available: usize },
}

/// Failures while rasterizing or writing a figure artifact.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
