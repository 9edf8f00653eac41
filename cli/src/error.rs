use randomkit::RandomError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command line tool
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(#[from] lexopt::Error),

    #[error("Failed to read request file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Random(#[from] RandomError),
}
