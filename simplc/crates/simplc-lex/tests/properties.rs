//! Property-based tests for simplc-lex over arbitrary inputs.

use proptest::prelude::*;
use simplc_lex::chars::{is_delimiter_char, is_digit, is_ident_start, is_operator_char, is_whitespace};
use simplc_lex::{tokenize, Keyword, Token, TokenKind, TokenStream};
use simplc_util::Handler;

fn lex(source: &str) -> (TokenStream, Handler) {
    let mut handler = Handler::new();
    let stream = tokenize(source, &mut handler);
    (stream, handler)
}

fn starts_token(c: char) -> bool {
    is_digit(c) || is_ident_start(c) || is_operator_char(c) || is_delimiter_char(c)
}

#[test]
fn test_property_single_trailing_eof() {
    proptest!(|(input in "\\PC{0,200}")| {
        let (stream, _) = lex(&input);
        prop_assert!(!stream.is_empty());
        prop_assert_eq!(stream.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(stream.eof().is_eof());
        prop_assert_eq!(stream.eof().text.as_str(), Token::EOF_TEXT);
    });
}

#[test]
fn test_property_lines_never_decrease() {
    proptest!(|(input in "[a-z0-9 \\n;=<!&|@]{0,200}")| {
        let (stream, _) = lex(&input);
        let lines: Vec<_> = stream.iter().map(|t| t.line).collect();
        prop_assert!(lines.windows(2).all(|w| w[0] <= w[1]));

        let newlines = input.matches('\n').count() as u32;
        prop_assert_eq!(stream.eof().line, newlines + 1);
    });
}

#[test]
fn test_property_token_text_is_never_empty() {
    proptest!(|(input in "\\PC{0,200}")| {
        let (stream, _) = lex(&input);
        prop_assert!(stream.iter().all(|t| !t.text.is_empty()));
    });
}

#[test]
fn test_property_one_diagnostic_per_unrecognized_char() {
    proptest!(|(input in "\\PC{0,200}")| {
        let (_, handler) = lex(&input);
        let expected = input
            .chars()
            .filter(|&c| !is_whitespace(c) && !starts_token(c))
            .count();
        prop_assert_eq!(handler.error_count(), expected);
    });
}

#[test]
fn test_property_lexemes_cover_significant_text() {
    proptest!(|(input in "[a-zA-Z0-9_ \\t\\n+*/=<>!&|;,(){}\\[\\]-]{0,200}")| {
        let (stream, handler) = lex(&input);
        prop_assert!(!handler.has_errors());

        let rebuilt: String = stream
            .iter()
            .filter(|t| !t.is_eof())
            .map(|t| match t.as_keyword() {
                Some(keyword) => keyword.source_text(),
                None => t.text.as_str(),
            })
            .collect();
        let expected: String = input.chars().filter(|&c| !is_whitespace(c)).collect();
        prop_assert_eq!(rebuilt, expected);
    });
}

#[test]
fn test_property_identifiers_and_keywords() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
        let (stream, _) = lex(&input);
        prop_assert_eq!(stream.len(), 2);

        match Keyword::from_ident(&input) {
            Some(keyword) => prop_assert_eq!(&stream[0], &Token::keyword(keyword, 1)),
            None => prop_assert_eq!(&stream[0], &Token::new(TokenKind::Identifier, input.clone(), 1)),
        }
    });
}

#[test]
fn test_property_digit_runs_are_one_number() {
    proptest!(|(input in "[0-9]{1,64}")| {
        let (stream, _) = lex(&input);
        prop_assert_eq!(stream.len(), 2);
        prop_assert_eq!(&stream[0], &Token::new(TokenKind::Number, input.clone(), 1));
    });
}
