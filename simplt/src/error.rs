//! Error handling module for the simplt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use simplc_util::SourceError;
use thiserror::Error;

/// Main error type for the simplt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of simplt commands.
#[derive(Error, Debug)]
pub enum SimpltError {
    /// Error when the configuration cannot be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a source file cannot be loaded for scanning.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result type alias using SimpltError.
pub type Result<T> = std::result::Result<T, SimpltError>;
