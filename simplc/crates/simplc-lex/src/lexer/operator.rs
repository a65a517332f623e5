//! Operator lexing.
//!
//! Maximal munch: a two-character operator is tried before falling back to
//! the single-character table, so `<=` is never split into `<` and `=`.
//!
//! | Lexeme                   | Kind       |
//! |--------------------------|------------|
//! | `==` `<=` `>=` `!=`      | Relational |
//! | `&&` `\|\|`              | Logical    |
//! | `+` `-` `*` `/`          | Arithmetic |
//! | `=`                      | Assignment |
//! | `!`                      | Unary      |
//! | `<` `>`                  | Relational |
//! | lone `&` or `\|`         | Unknown    |

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes one operator starting at the current position.
    ///
    /// Must be called with the cursor on an operator-set character. Consumes
    /// two characters when they form a two-character operator, otherwise
    /// one.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let first = self.cursor.current_char();
        self.cursor.advance();

        if !self.cursor.is_at_end() {
            if let Some(kind) = two_char_operator(first, self.cursor.current_char()) {
                self.cursor.advance();
                return self.make_token(kind);
            }
        }

        self.make_token(single_char_operator(first))
    }
}

/// Looks up a two-character operator.
///
/// # Example
///
/// ```
/// use simplc_lex::{two_char_operator, TokenKind};
///
/// assert_eq!(two_char_operator('<', '='), Some(TokenKind::RelationalOperator));
/// assert_eq!(two_char_operator('&', '&'), Some(TokenKind::LogicalOperator));
/// assert_eq!(two_char_operator('=', '<'), None);
/// ```
pub fn two_char_operator(first: char, second: char) -> Option<TokenKind> {
    match (first, second) {
        ('=', '=') | ('<', '=') | ('>', '=') | ('!', '=') => Some(TokenKind::RelationalOperator),
        ('&', '&') | ('|', '|') => Some(TokenKind::LogicalOperator),
        _ => None,
    }
}

/// Classifies a lone operator character.
///
/// Characters with no single-character meaning classify as
/// [`TokenKind::Unknown`].
///
/// # Example
///
/// ```
/// use simplc_lex::{single_char_operator, TokenKind};
///
/// assert_eq!(single_char_operator('!'), TokenKind::UnaryOperator);
/// assert_eq!(single_char_operator('&'), TokenKind::Unknown);
/// ```
pub fn single_char_operator(c: char) -> TokenKind {
    match c {
        '+' | '-' | '*' | '/' => TokenKind::ArithmeticOperator,
        '=' => TokenKind::AssignmentOperator,
        '!' => TokenKind::UnaryOperator,
        '<' | '>' => TokenKind::RelationalOperator,
        _ => TokenKind::Unknown,
    }
}
