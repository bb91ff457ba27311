//! Domain error types

use thiserror::Error;

/// Error when an invalid selection source is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid selection source: \"{input}\". Valid sources are: primary, clipboard")]
pub struct InvalidSelectionSourceError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

impl ConfigError {
    /// Shorthand for an unknown-key validation error
    pub fn unknown_key(key: &str, valid: &[&str]) -> Self {
        Self::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", valid.join(", ")),
        }
    }
}
