//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are advisory: emitting one never stops the phase that
//! produced it. A [`Handler`] simply collects them in emission order so the
//! caller can print, count, or inspect them afterwards.
//!
//! # Examples
//!
//! ```
//! use simplc_util::diagnostic::{Diagnostic, Handler};
//! use simplc_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("unexpected '#'", Span::DUMMY));
//!
//! if handler.has_errors() {
//!     eprintln!("{} error(s)", handler.error_count());
//! }
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders `level[CODE]: message`, or `level: message` without a code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// One handler serves one scan. Interior mutability lets the producer hold
/// a shared reference while still recording diagnostics.
///
/// # Examples
///
/// ```
/// use simplc_util::diagnostic::{Diagnostic, Handler};
/// use simplc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("unused", Span::DUMMY));
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

static_assertions::assert_impl_all!(Handler: Send);
static_assertions::assert_not_impl_any!(Handler: Sync);

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Move all diagnostics out, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
