//! Number literal lexing.
//!
//! Numbers are plain runs of decimal digits. There is no sign, fraction,
//! exponent or radix prefix, and no value is computed, so digit runs of
//! any length are kept intact.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the maximal run of digits at the current position.
    ///
    /// Must be called with the cursor on a digit.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);
        self.make_token(TokenKind::Number)
    }
}
