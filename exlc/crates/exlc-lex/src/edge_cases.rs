//! Edge case tests for exlc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Source, Token, TokenKind};

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    fn error_message(source: &str) -> String {
        tokenize(source).unwrap_err().message().to_string()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_edge_single_char_keyword() {
        let t = tokenize("x").unwrap();
        assert_eq!(t, [Token::new(TokenKind::Keyword, "x", exlc_util::Location::new(1, 1))]);
    }

    #[test]
    fn test_edge_long_keyword() {
        let name = "a".repeat(10000);
        let t = tokenize(&format!("{} + 1", name)).unwrap();
        assert_eq!(t[0].text, name);
        assert_eq!(t[1].location.column, 10002);
    }

    #[test]
    fn test_edge_keyword_with_digits() {
        assert_eq!(texts("a1b2 _ __9"), ["a1b2", "_", "__9"]);
    }

    #[test]
    fn test_edge_number_then_keyword() {
        let t = tokenize("12ab").unwrap();
        assert_eq!(t[0].kind, TokenKind::Number);
        assert_eq!(t[1].kind, TokenKind::Keyword);
        assert_eq!(t[1].text, "ab");
    }

    #[test]
    fn test_edge_hex_bounds() {
        assert_eq!(texts("0x0 0XFF"), ["0x0", "0xFF"]);
    }

    #[test]
    fn test_edge_hex_stops_at_non_hex() {
        assert_eq!(texts("0x1g"), ["0x1", "g"]);
    }

    #[test]
    fn test_edge_octal_shaped() {
        assert_eq!(texts("0 00 017"), ["0", "00", "017"]);
        assert_eq!(error_message("09"), "Digit out of range in octal constant");
        assert_eq!(error_message("0778"), "Digit out of range in octal constant");
    }

    #[test]
    fn test_edge_zero_fraction() {
        assert_eq!(texts("0.5"), ["0.5"]);
    }

    #[test]
    fn test_edge_bad_hex_literal() {
        assert_eq!(error_message("0xZ"), "No valid hex digits after 0x");
        assert_eq!(error_message("0x"), "No valid hex digits after 0x");
    }

    #[test]
    fn test_edge_leading_dot_is_operator() {
        assert_eq!(texts(".5"), [".", "5"]);
    }

    #[test]
    fn test_edge_all_operators_spaced() {
        let source = "^ ^= ~ < << <<= <= = == > >> >>= >= | |= || - -= -> -- , ! != ? : / /= . ( ) [ ] * *= & &= && % %= + += ++ ; { }";
        let t = tokenize(source).unwrap();
        assert_eq!(t.len(), crate::PUNCTUATORS.len());
        assert!(t.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_edge_greedy_regroupings() {
        assert_eq!(texts("a+++b"), ["a", "++", "+", "b"]);
        assert_eq!(texts("<<<="), ["<<", "<="]);
        assert_eq!(texts("&&&"), ["&&", "&"]);
        assert_eq!(texts("!!="), ["!", "!="]);
    }

    #[test]
    fn test_edge_nested_brackets() {
        assert_eq!(texts("(([{}]))").len(), 8);
    }

    #[test]
    fn test_edge_bad_characters() {
        for c in ['$', '@', '#', '`', '\\', '\u{e9}'] {
            let err = tokenize(&format!("1 {} 2", c)).unwrap_err();
            assert_eq!(err.message(), format!("Bad character '{}'", c));
            assert_eq!(err.location().map(|l| l.column), Some(3));
        }
    }

    #[test]
    fn test_edge_comment_between_operator_chars() {
        // A comment always splits what surrounds it.
        assert_eq!(texts(">/**/>"), [">", ">"]);
        assert_eq!(texts("1/**/2"), ["1", "2"]);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        assert_eq!(texts("1 + 2 // done"), ["1", "+", "2"]);
    }

    #[test]
    fn test_edge_division_not_comment() {
        assert_eq!(texts("6 / 3 /= 2"), ["6", "/", "3", "/=", "2"]);
    }

    #[test]
    fn test_edge_unterminated_comment_after_tokens() {
        let err = tokenize("1 + /* open").unwrap_err();
        assert_eq!(err.message(), "Unterminated comment");
    }

    #[test]
    fn test_edge_string_spanning_lines() {
        let t = tokenize("'a\nb' 1").unwrap();
        assert_eq!(t[0].text, "a\nb");
        assert_eq!((t[1].location.line, t[1].location.column), (2, 4));
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(texts("'a''b'\"c\""), ["a", "b", "c"]);
    }

    #[test]
    fn test_edge_string_with_comment_openers_at_edges() {
        assert_eq!(texts("'/*' '*/' '//'"), ["/*", "*/", "//"]);
    }

    #[test]
    fn test_edge_vertical_tab_and_form_feed_are_space() {
        assert_eq!(texts("1\x0b+\x0c2\r"), ["1", "+", "2"]);
    }

    #[test]
    fn test_edge_non_ascii_in_string() {
        assert_eq!(texts("'caf\u{e9}'"), ["caf\u{e9}"]);
    }

    #[test]
    fn test_edge_lexer_over_custom_iterator() {
        let chars = "1+2".chars().collect::<Vec<_>>().into_iter();
        let lexer = Lexer::new(Source::new(chars).unwrap());
        let tokens: Vec<_> = lexer.map(|t| t.unwrap().text).collect();
        assert_eq!(tokens, ["1", "+", "2"]);
    }

    #[test]
    fn test_edge_advance_after_end_stays_at_end() {
        let mut lexer = Lexer::from_text("1").unwrap();
        assert!(lexer.advance().unwrap());
        assert!(!lexer.advance().unwrap());
        assert!(!lexer.advance().unwrap());
        assert!(lexer.eof());
    }
}
