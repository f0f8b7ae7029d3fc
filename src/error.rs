//! Error types for text-filter.
//!
//! Classification itself never fails; these cover building rules and
//! pipelines from configuration.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfiguration { key: String, message: String },

    #[error("Pipeline must contain at least one rule")]
    EmptyPipeline,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type alias for text-filter.
pub type Result<T> = std::result::Result<T, Error>;
