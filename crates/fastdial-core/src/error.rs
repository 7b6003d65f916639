//! Core error types for fastdial-core.
//!
//! The fasting engine itself is total and never fails. Errors only arise
//! when values are constructed at the boundary (out-of-range minutes,
//! unparsable `HH:MM` strings) or when configuration is read and written.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fastdial-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors raised when constructing engine values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric argument fell outside its permitted range.
    #[error("Invalid argument '{field}': {value} is outside 0..{limit}")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        limit: i64,
    },

    /// Text could not be parsed into the expected shape.
    #[error("Invalid format for {what}: '{input}'")]
    InvalidFormat { what: &'static str, input: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
