//! Character classes for the simpliCty lexer.
//!
//! The language is ASCII-only: letters and digits are the ASCII ranges and
//! whitespace is the C `isspace` set. Any other character, including
//! non-ASCII letters, is unrecognized.

/// Characters that can begin an operator lexeme.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '!', '&', '|'];

/// Single-character delimiters.
pub const DELIMITER_CHARS: &[char] = &[';', ',', '(', ')', '{', '}', '[', ']'];

/// Checks if a character is whitespace.
///
/// Matches space, tab, newline, vertical tab, form feed and carriage return.
/// Unlike [`char::is_ascii_whitespace`] this includes vertical tab.
///
/// # Example
///
/// ```
/// use simplc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));  // no-break space is not ASCII
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier: an ASCII letter or `_`.
///
/// # Example
///
/// ```
/// use simplc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('é'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: an ASCII letter,
/// digit, or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to the operator set `+ - * / = < > ! & |`.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Checks if a character belongs to the delimiter set `; , ( ) { } [ ]`.
#[inline]
pub fn is_delimiter_char(c: char) -> bool {
    DELIMITER_CHARS.contains(&c)
}
