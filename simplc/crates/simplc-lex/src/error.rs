//! Lexical error kinds.
//!
//! Scanning has exactly one failure mode, and it is not fatal: a character
//! outside every lexical class is reported and skipped.

use simplc_util::DiagnosticCode;
use thiserror::Error;

/// A problem found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Character that is not whitespace and does not start any token
    #[error("Unrecognized character '{}' at line {line}", .ch.escape_debug())]
    UnrecognizedCharacter {
        /// The offending character
        ch: char,
        /// 1-based line it appeared on
        line: u32,
    },
}

impl LexError {
    /// Diagnostic code for this error.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_LEXER_UNRECOGNIZED_CHAR,
        }
    }
}
