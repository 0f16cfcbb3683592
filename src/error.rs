//! Error types for `homelink-config`

use thiserror::Error;

/// Main error type for connection-configuration handling
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Construction or reconstruction rejected the supplied values
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A persisted JSON document could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Decode(err.to_string())
    }
}
