//! Error types for curate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CurateError
pub type Result<T> = std::result::Result<T, CurateError>;

/// Main error type for curate operations
#[derive(Debug, Error)]
pub enum CurateError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input-related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Output-related errors
    #[error(transparent)]
    Output(#[from] OutputError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Checks that did not pass
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading the version/commit log
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file does not exist
    #[error("File {0} not found")]
    NotFound(PathBuf),

    /// Input exists but is not a valid version log
    #[error("Invalid JSON in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing the rendered document
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the document
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Failed to render the document
    #[error("Failed to render changelog: {0}")]
    RenderFailed(String),
}
