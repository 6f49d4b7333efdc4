//! Error types for the kata CLI.

use kata_core::types::KataError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Exercise rejected its input
    #[error("Exercise error: {0}")]
    Exercise(#[from] KataError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON argument parsing or output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
