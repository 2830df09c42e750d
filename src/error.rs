//! Error types for Gradebook.
//!
//! Uses `thiserror` for ergonomic error definitions. Each concern
//! (storage, configuration, CLI) carries its own enum and `Result` alias.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from roster persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to save roster: {0}")]
    SaveFailed(String),

    #[error("failed to create data directory: {0}")]
    DirectoryError(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from configuration loading and saving.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine user directories")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grade(#[from] crate::types::GradeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
