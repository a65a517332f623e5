//! Span module - Source location tracking.
//!
//! A [`Span`] records where a piece of source text lives: the byte range it
//! covers and the human-readable line/column of its first character.
//!
//! # Examples
//!
//! ```
//! use simplc_util::span::Span;
//!
//! // Byte range 4..6 starting on line 1, column 5
//! let span = Span::new(4, 6, 1, 5);
//! assert_eq!(span.len(), 2);
//!
//! // A single character
//! let point = Span::point(10, 2, 3);
//! assert_eq!(point.len(), 1);
//! ```

use std::fmt;

/// Source location span
///
/// Offsets are byte offsets into the scanned buffer. `line` and `column`
/// are 1-based; `column` counts characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use simplc_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span covering the single ASCII character at `start`.
    #[inline]
    pub const fn point(start: usize, line: u32, column: u32) -> Self {
        Self::new(start, start + 1, line, column)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
