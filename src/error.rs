//! Error types for the configuration and input boundaries.
//!
//! The calculation itself cannot fail; only reading configuration and
//! equipment files can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"workshop.total_power"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure to load an equipment list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON equipment list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV equipment list: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported equipment file \"{}\", expected .json or .csv", .0.display())]
    UnsupportedFormat(PathBuf),
}
