//! Error types for Courier core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the core message types.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown message format: {0}")]
    UnknownFormat(String),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON5 parse error: {0}")]
    Json5(String),
}
