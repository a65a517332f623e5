//! Character cursor for traversing source code.
//!
//! The `Cursor` walks the input buffer left to right exactly once. It owns
//! the scan's [`LineTracker`] and keeps a column count for diagnostics.

use crate::line_tracker::LineTracker;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use simplc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Line counter for this scan.
    lines: LineTracker,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            lines: LineTracker::new(),
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    ///
    /// A `'\0'` inside the source is returned as-is; use
    /// [`is_at_end`](Self::is_at_end) to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return '\0';
        };

        // Fast path for ASCII
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Advances past the current character.
    ///
    /// Consuming a `'\n'` moves the line tracker forward. Does nothing at the
    /// end of the source.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.lines.newline();
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use simplc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.lines.current()
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use simplc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while x");
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(0), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
