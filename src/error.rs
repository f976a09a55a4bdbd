//! Unified error types.

use thiserror::Error;

/// Top-level chart error.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown range selection: {0}")]
    UnknownRange(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
