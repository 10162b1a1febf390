//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-related errors. All are fatal: the harness exits non-zero
/// before any scenario runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read configuration file '{path}': {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A field holds a value the harness cannot honor.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted field name.
        field: String,
        /// What is wrong with the value.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
}
