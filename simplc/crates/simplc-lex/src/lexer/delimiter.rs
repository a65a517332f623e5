//! Delimiter lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the single delimiter character at the current position.
    pub(crate) fn lex_delimiter(&mut self) -> Token {
        let kind = delimiter_kind(self.cursor.current_char());
        self.cursor.advance();
        self.make_token(kind)
    }
}

/// Classifies a delimiter character; anything else is
/// [`TokenKind::Unknown`].
pub fn delimiter_kind(c: char) -> TokenKind {
    match c {
        ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']' => TokenKind::Delimiter,
        _ => TokenKind::Unknown,
    }
}
