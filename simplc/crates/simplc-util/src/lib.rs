//! simplc-util - Shared foundation types for the simpliCty toolchain
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Everything here is used by more than one phase of the toolchain:
//!
//! - [`span`] - source locations (byte offsets plus 1-based line/column)
//! - [`diagnostic`] - severity levels, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//! - [`error`] - errors raised at the input boundary, before any scanning
//!
//! A [`Handler`] belongs to exactly one scan. It uses interior mutability
//! and is deliberately not `Sync`: concurrent scans each bring their own.
//!
//! # Example
//!
//! ```
//! use simplc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unrecognized character '@' at line 1")
//!     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_CHAR)
//!     .span(Span::point(2, 1, 3))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceError, SourceResult};
pub use span::Span;
