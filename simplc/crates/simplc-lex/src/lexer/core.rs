//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the whitespace skipper and the
//! dispatch loop that hands each lexeme to its classifier.

use simplc_util::{DiagnosticBuilder, Handler, Span};
use tracing::debug;

use crate::chars::{is_delimiter_char, is_digit, is_ident_start, is_operator_char, is_whitespace};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::stream::{TokenBuffer, TokenStream};
use crate::token::{Token, TokenKind};

/// Lexer for the simpliCty language.
///
/// A lexer scans one borrowed buffer exactly once, left to right. All scan
/// state (position, line counter, diagnostics sink) lives in the lexer, so
/// independent lexers can run side by side.
///
/// # Example
///
/// ```
/// use simplc_lex::{Lexer, TokenKind};
/// use simplc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("while (x)", &mut handler);
///
/// let token = lexer.next_token();
/// assert_eq!(token.kind, TokenKind::Keyword);
/// assert_eq!(token.text, "WHILE");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for unrecognized-character diagnostics.
    handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the end-of-input token has been handed out by the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character in this
    /// order: digit, identifier start, operator character, delimiter.
    /// Anything else is reported to the handler and skipped without
    /// producing a token.
    ///
    /// # Returns
    /// The next token, or the end-of-input token once the source is
    /// exhausted. Further calls keep returning end-of-input.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            self.start_token();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line());
            }

            let c = self.cursor.current_char();
            if is_digit(c) {
                return self.lex_number();
            }
            if is_ident_start(c) {
                return self.lex_identifier();
            }
            if is_operator_char(c) {
                return self.lex_operator();
            }
            if is_delimiter_char(c) {
                return self.lex_delimiter();
            }

            self.report_unrecognized(c);
            self.cursor.advance();
        }
    }

    /// Scans the rest of the source into a finished [`TokenStream`].
    pub fn tokenize(mut self) -> TokenStream {
        let mut buffer = TokenBuffer::new();
        let stream = loop {
            let token = self.next_token();
            if token.is_eof() {
                break buffer.finish(token);
            }
            buffer.push(token);
        };
        self.finished = true;

        debug!(
            tokens = stream.len(),
            lines = stream.eof().line,
            errors = self.handler.error_count(),
            "scan finished"
        );
        stream
    }

    /// Skips whitespace; the cursor advances the line counter on newlines.
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Records where the next token begins.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token of `kind` whose text is everything consumed since
    /// [`start_token`](Self::start_token).
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
        )
    }

    /// Reports a character that starts no token.
    fn report_unrecognized(&mut self, c: char) {
        let line = self.token_start_line;
        debug!(ch = ?c, line, "unrecognized character");

        let span = Span::new(
            self.token_start,
            self.token_start + c.len_utf8(),
            line,
            self.token_start_column,
        );
        let error = LexError::UnrecognizedCharacter { ch: c, line };
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line the next token would be attributed to, before whitespace
    /// skipping.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token including a single end-of-input token, then
    /// `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scans `source` into a finished [`TokenStream`], reporting unrecognized
/// characters to `handler`.
///
/// # Example
///
/// ```
/// use simplc_lex::{tokenize, TokenKind};
/// use simplc_util::Handler;
///
/// let mut handler = Handler::new();
/// let stream = tokenize("a @ b", &mut handler);
///
/// let kinds: Vec<_> = stream.kinds().collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfInput]
/// );
/// assert_eq!(handler.error_count(), 1);
/// ```
pub fn tokenize(source: &str, handler: &mut Handler) -> TokenStream {
    let _span = tracing::debug_span!("tokenize", bytes = source.len()).entered();
    Lexer::new(source, handler).tokenize()
}
