//! Error types for the CLI

use tapcalc::ParseKeyError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A key sequence could not be parsed
    #[error("Invalid keys {input:?}: {source}")]
    InvalidKeys {
        /// The sequence as typed
        input: String,
        /// What was wrong with it
        #[source]
        source: ParseKeyError,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid key sequence error
    #[must_use]
    pub fn invalid_keys(input: impl Into<String>, source: ParseKeyError) -> Self {
        Self::InvalidKeys {
            input: input.into(),
            source,
        }
    }
}
