//! Edge case tests for simplc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Keyword, Token, TokenKind, TokenStream};
    use simplc_util::{Handler, Level};

    fn lex(source: &str) -> (TokenStream, Handler) {
        let mut handler = Handler::new();
        let stream = tokenize(source, &mut handler);
        (stream, handler)
    }

    fn texts(source: &str) -> Vec<String> {
        lex(source).0.into_iter().map(|t| t.text).collect()
    }

    // ==================== EMPTY AND TRIVIAL ====================

    #[test]
    fn test_edge_empty_source() {
        let (stream, handler) = lex("");
        assert_eq!(stream.len(), 1);
        assert_eq!(stream[0], Token::eof(1));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (stream, _) = lex("x");
        assert_eq!(stream[0], Token::new(TokenKind::Identifier, "x", 1));
    }

    #[test]
    fn test_edge_underscore_only_ident() {
        let (stream, _) = lex("_ __ _1");
        let kinds: Vec<_> = stream.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (stream, _) = lex(&format!("int {} = 1;", name));
        assert_eq!(stream[1].text, name);
    }

    // ==================== KEYWORDS ====================

    #[test]
    fn test_edge_all_keywords() {
        let (stream, _) = lex("break int if return while");
        let keywords: Vec<_> = stream.iter().filter_map(Token::as_keyword).collect();
        assert_eq!(keywords, Keyword::ALL.to_vec());
        assert!(stream.iter().take(5).all(|t| t.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_edge_keyword_prefix_and_suffix() {
        let (stream, _) = lex("integer iffy whiles _if If");
        assert!(stream
            .iter()
            .filter(|t| !t.is_eof())
            .all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(stream[0].text, "integer");
        assert_eq!(stream[4].text, "If");
    }

    // ==================== GROWTH ====================

    #[test]
    fn test_edge_stream_grows_past_initial_capacity() {
        let source = "x ".repeat(60);
        let (stream, _) = lex(&source);
        assert_eq!(stream.len(), 61);
        assert!(stream.capacity() >= 61);
        assert!(stream[59].text == "x");
        assert!(stream[60].is_eof());
    }

    #[test]
    fn test_edge_empty_source_eof_is_only_token() {
        let (stream, _) = lex("");
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.get(0), Some(stream.eof()));
        assert!(stream.get(1).is_none());
    }

    // ==================== LINES ====================

    #[test]
    fn test_edge_line_numbers_across_blank_lines() {
        let (stream, _) = lex("int\n\n\nx\n;");
        let lines: Vec<_> = stream.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 4, 5, 5]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (stream, handler) = lex("a\r\nb\r\n");
        assert_eq!(stream[1].line, 2);
        assert_eq!(stream.eof().line, 3);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_separate_scans_restart_at_line_one() {
        let (first, _) = lex("a\nb\nc");
        let (second, _) = lex("d");
        assert_eq!(first.eof().line, 3);
        assert_eq!(second[0].line, 1);
    }

    #[test]
    fn test_edge_vertical_tab_and_form_feed_are_whitespace() {
        let (stream, handler) = lex("a\x0Bb\x0Cc");
        assert_eq!(stream.len(), 4);
        assert!(!handler.has_errors());
    }

    // ==================== UNRECOGNIZED ====================

    #[test]
    fn test_edge_unrecognized_between_tokens() {
        let (stream, handler) = lex("a @ b");
        assert_eq!(
            stream.into_vec(),
            vec![
                Token::new(TokenKind::Identifier, "a", 1),
                Token::new(TokenKind::Identifier, "b", 1),
                Token::eof(1),
            ]
        );
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].level, Level::Error);
    }

    #[test]
    fn test_edge_unrecognized_glued_to_identifier() {
        assert_eq!(texts("foo$bar"), vec!["foo", "bar", "EOF"]);
    }

    #[test]
    fn test_edge_non_ascii_letters_are_unrecognized() {
        let (stream, handler) = lex("caf\u{e9} = 1;");
        assert_eq!(stream[0].text, "caf");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].message,
            "Unrecognized character '\u{e9}' at line 1"
        );
        assert_eq!(handler.diagnostics()[0].span.len(), 2);
    }

    // Unlike a NUL-terminated scan, input does not end at '\0': the NUL is
    // reported like any other stray character and the text after it is
    // still tokenized.
    #[test]
    fn test_edge_embedded_nul() {
        let (stream, handler) = lex("a\0b");
        assert_eq!(stream.len(), 3);
        assert_eq!(stream[1].text, "b");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].message,
            "Unrecognized character '\\0' at line 1"
        );
    }

    #[test]
    fn test_edge_only_unrecognized() {
        let (stream, handler) = lex("@#$`~");
        assert_eq!(stream.len(), 1);
        assert_eq!(handler.error_count(), 5);
    }

    #[test]
    fn test_edge_unknown_operators_do_not_report() {
        let (stream, handler) = lex("a & b | c");
        assert_eq!(stream[1].kind, TokenKind::Unknown);
        assert_eq!(stream[3].kind, TokenKind::Unknown);
        assert!(!handler.has_errors());
    }

    // ==================== SOURCE COVERAGE ====================

    #[test]
    fn test_edge_lexemes_rebuild_significant_text() {
        let source = "int main() {\n  if (a<=b&&!c) return a[0]+1;\n  while(x!=0)x=x-1;\n}\n";
        let (stream, handler) = lex(source);
        assert!(!handler.has_errors());

        let rebuilt: String = stream
            .iter()
            .filter(|t| !t.is_eof())
            .map(|t| match t.as_keyword() {
                Some(keyword) => keyword.source_text().to_string(),
                None => t.text.clone(),
            })
            .collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, expected);
    }
}
