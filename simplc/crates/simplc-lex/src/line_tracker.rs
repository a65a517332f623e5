//! Line tracking for a single scan.

/// Counts source lines while a scan advances.
///
/// Starts at line 1 and moves forward once per newline consumed. Each
/// [`Cursor`](crate::cursor::Cursor) owns its own tracker, so scans never
/// share line state.
///
/// # Example
///
/// ```
/// use simplc_lex::LineTracker;
///
/// let mut lines = LineTracker::new();
/// assert_eq!(lines.current(), 1);
/// lines.newline();
/// assert_eq!(lines.current(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTracker {
    line: u32,
}

impl LineTracker {
    /// The line every scan starts on.
    pub const FIRST_LINE: u32 = 1;

    /// Creates a tracker positioned on line 1.
    pub const fn new() -> Self {
        Self {
            line: Self::FIRST_LINE,
        }
    }

    /// Returns the current 1-based line.
    #[inline]
    pub const fn current(&self) -> u32 {
        self.line
    }

    /// Records one consumed newline.
    #[inline]
    pub fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
    }
}

impl Default for LineTracker {
    fn default() -> Self {
        Self::new()
    }
}
