//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use simplc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem in the input
    Error,
    /// Something suspicious that does not affect the result
    Warning,
}

impl Level {
    /// Returns the lowercase name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// Returns true for [`Level::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
