//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument combination or value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine reported a failure.
    #[error("engine error: {0}")]
    Engine(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV parsing failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
