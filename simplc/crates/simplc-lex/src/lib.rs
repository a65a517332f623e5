//! simplc-lex - Lexical Analyzer for the simpliCty Language
//!
//! This crate turns simpliCty source text into an ordered stream of
//! classified tokens for the parser.
//!
//! # Example Usage
//!
//! ```
//! use simplc_util::Handler;
//! use simplc_lex::{tokenize, TokenKind};
//!
//! let mut handler = Handler::new();
//! let stream = tokenize("int x = 5;", &mut handler);
//!
//! let texts: Vec<_> = stream.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["INT", "x", "=", "5", ";", "EOF"]);
//! assert_eq!(stream[0].kind, TokenKind::Keyword);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kinds and keywords
//! - [`lexer`] - The scanning loop and the four classifiers
//! - [`cursor`] - Character cursor for source traversal
//! - [`line_tracker`] - Per-scan line counter
//! - [`stream`] - The finished token sequence
//! - [`chars`] - Character classes
//! - [`source`] - Loading files into memory before scanning
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `break`, `int`, `if`, `return`, `while`. Matched exactly and
//! case-sensitively; emitted with uppercase text (`WHILE`).
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Numbers
//!
//! Pattern: `[0-9]+`, kept verbatim.
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Relational**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`
//! - **Assignment**: `=`
//! - **Unary**: `!`
//!
//! A lone `&` or `|` becomes an `Unknown` token.
//!
//! ## Delimiters
//!
//! `;` `,` `(` `)` `{` `}` `[` `]`
//!
//! ## Special
//!
//! - **EndOfInput**: exactly one, always last, text `EOF`
//!
//! Any other non-whitespace character is reported to the [`Handler`] as
//! an unrecognized character and skipped.
//!
//! [`Handler`]: simplc_util::Handler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod line_tracker;
pub mod source;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{
    classify_word, delimiter_kind, single_char_operator, tokenize, two_char_operator, Lexer,
};
pub use line_tracker::LineTracker;
pub use source::{lex_file, read_source};
pub use stream::TokenStream;
pub use token::{Keyword, Token, TokenKind};
