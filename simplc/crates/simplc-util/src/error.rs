//! Core error types for simplc-util crate
//!
//! Errors raised before scanning starts, while the source buffer is being
//! loaded. Scanning itself never fails; see the lexer's diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading a source buffer
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("Failed to read source file {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for source loading operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
