//! Lexer module.
//!
//! The implementation is split by lexical class:
//! - `core` - Lexer struct, whitespace skipping and dispatch
//! - `number` - digit runs
//! - `identifier` - identifiers and keywords
//! - `operator` - one- and two-character operators
//! - `delimiter` - single-character delimiters

mod core;
mod delimiter;
mod identifier;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer};
pub use delimiter::delimiter_kind;
pub use identifier::classify_word;
pub use operator::{single_char_operator, two_char_operator};
