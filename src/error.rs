//! Error handling module for passgen
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Argument-parsing failures never reach this type; clap reports those itself.

use thiserror::Error;

/// Main error type for passgen
#[derive(Error, Debug)]
pub enum PassgenError {
    /// The selected character classes produce an empty alphabet.
    ///
    /// Retrying with the same selectors cannot succeed, so this is never
    /// retried internally.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A password of the requested length cannot be generated
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Every draw collided with the denylist until the attempt cap
    #[error("Generation error: no acceptable password after {attempts} attempts")]
    Generation { attempts: usize },

    /// IO errors (config file read/write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for passgen operations
pub type Result<T> = std::result::Result<T, PassgenError>;

impl PassgenError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid length error
    pub fn invalid_length(msg: impl Into<String>) -> Self {
        Self::InvalidLength(msg.into())
    }

    /// Create a generation error
    pub fn generation(attempts: usize) -> Self {
        Self::Generation { attempts }
    }
}
