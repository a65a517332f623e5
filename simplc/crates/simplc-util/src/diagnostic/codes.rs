//! Diagnostic codes for categorizing errors and warnings.
//!
//! Codes follow the format `{prefix}{number}` with the number padded to four
//! digits. The 1xxx range belongs to the lexer.
//!
//! # Examples
//!
//! ```
//! use simplc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNRECOGNIZED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use simplc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 1);
    /// assert_eq!(code.as_str(), "W0001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (E1000-E1999)
    // =========================================================================

    /// E1001: Character outside every lexical class
    pub const E_LEXER_UNRECOGNIZED_CHAR: Self = Self::new("E", 1001);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
