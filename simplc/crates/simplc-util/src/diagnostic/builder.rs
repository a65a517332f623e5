//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Fluent builder for a [`Diagnostic`].
///
/// # Examples
///
/// ```
/// use simplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use simplc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Unrecognized character '$' at line 3")
///     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_CHAR)
///     .span(Span::point(14, 3, 2))
///     .emit(&handler);
///
/// assert!(handler.has_errors());
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Start an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building without emitting.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build the diagnostic and hand it to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
