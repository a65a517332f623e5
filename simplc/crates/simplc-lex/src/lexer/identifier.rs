//! Identifier and keyword lexing.
//!
//! The whole word is consumed first; only then is it compared against the
//! keyword table. A word is a keyword only when it matches a keyword
//! spelling exactly, so `integers`, `iffy` and `While` are identifiers.

use crate::chars::is_ident_continue;
use crate::token::{Keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Must be called with the cursor on a letter or underscore. Consumes
    /// the maximal run of letters, digits and underscores.
    ///
    /// # Returns
    ///
    /// A keyword token with canonical uppercase text, or an identifier
    /// token carrying the word as written.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let word = self.cursor.slice_from(self.token_start);
        classify_word(word, self.token_start_line)
    }
}

/// Classifies a complete word as a keyword or an identifier.
///
/// # Example
///
/// ```
/// use simplc_lex::{classify_word, TokenKind};
///
/// let token = classify_word("return", 2);
/// assert_eq!(token.kind, TokenKind::Keyword);
/// assert_eq!(token.text, "RETURN");
///
/// let token = classify_word("returned", 2);
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.text, "returned");
/// ```
pub fn classify_word(word: &str, line: u32) -> Token {
    match Keyword::from_ident(word) {
        Some(keyword) => Token::keyword(keyword, line),
        None => Token::new(TokenKind::Identifier, word, line),
    }
}
