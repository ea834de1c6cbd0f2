//! Edge case tests for exlc-par

#[cfg(test)]
mod tests {
    use crate::{parse_str, Expr, Operator, Value, MAX_NESTING};
    use exlc_util::Location;

    fn printed(source: &str) -> String {
        parse_str(source).unwrap().to_string()
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Whitespace and comments only
    #[test]
    fn test_edge_nothing_to_parse() {
        for source in ["", "   \n\t  ", "/* just a comment */", "// line"] {
            let err = parse_str(source).unwrap_err();
            assert_eq!(err.message(), "Syntax error: unexpected end of input");
        }
    }

    /// EDGE CASE: Comments are invisible to the parser
    #[test]
    fn test_edge_comments_between_tokens() {
        assert_eq!(
            parse_str("1 /* x */ + /* y */ 2").unwrap(),
            parse_str("1+2").unwrap()
        );
        assert_eq!(printed("1 + // rest of line\n 2"), "(1+2)");
    }

    /// EDGE CASE: Empty string constant is still a token
    #[test]
    fn test_edge_empty_string() {
        assert_eq!(parse_str("''").unwrap(), Expr::constant(""));
        assert_eq!(printed("'' + ''"), "(\"\"+\"\")");
    }

    /// EDGE CASE: Empty brackets
    #[test]
    fn test_edge_empty_brackets() {
        assert!(parse_str("()").is_err());
        assert!(parse_str("[]").is_err());
        assert!(parse_str("{}").is_err());
    }

    /// EDGE CASE: Deeply nested grouping
    #[test]
    fn test_edge_deep_nesting() {
        let source = format!("{}1{}", "(".repeat(64), ")".repeat(64));
        assert_eq!(parse_str(&source).unwrap(), Expr::constant(1.0));
    }

    /// EDGE CASE: Nesting at and past the limit
    #[test]
    fn test_edge_nesting_limit() {
        let depth = MAX_NESTING as usize;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_str(&source).unwrap(), Expr::constant(1.0));

        let source = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.message(), "Expression nested too deeply");
        assert_eq!(err.location(), Some(Location::new(1, depth as u32 + 2)));
    }

    /// EDGE CASE: Very deep input fails cleanly instead of overflowing
    #[test]
    fn test_edge_runaway_nesting() {
        let parens = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
        let unary = format!("{}1", "- ".repeat(3000));
        let ternary = format!("{}1", "1 ? 1 : ".repeat(3000));
        for source in [parens, unary, ternary] {
            let err = parse_str(&source).unwrap_err();
            assert_eq!(err.message(), "Expression nested too deeply");
        }
    }

    /// EDGE CASE: Literals beyond the range of a double
    #[test]
    fn test_edge_number_out_of_range() {
        let huge = format!("1{}", "0".repeat(400));
        let err = parse_str(&format!("2 + {}", huge)).unwrap_err();
        assert_eq!(err.message(), "Number out of range");
        assert_eq!(err.location(), Some(Location::new(1, 5)));

        let hex = format!("0x{}", "f".repeat(300));
        assert_eq!(parse_str(&hex).unwrap_err().message(), "Number out of range");

        // The largest literal that fits still prints and parses back.
        let big = format!("1{}", "0".repeat(300));
        let expr = parse_str(&big).unwrap();
        assert_eq!(parse_str(&expr.to_string()).unwrap(), expr);
    }

    /// EDGE CASE: Long operator chains
    #[test]
    fn test_edge_long_chain() {
        let source = vec!["1"; 500].join(" + ");
        let expr = parse_str(&source).unwrap();
        assert_eq!(expr.node_count(), 999);
    }

    /// EDGE CASE: Stacked prefix operators
    #[test]
    fn test_edge_stacked_unary() {
        assert_eq!(printed("- - - 1"), "(-(-(-1)))");
        assert_eq!(printed("!!true"), "(!(!true))");
        // `--` lexes as one operator, which has no meaning here.
        assert_eq!(
            parse_str("--1").unwrap_err().message(),
            "Unexpected operator: --"
        );
    }

    /// EDGE CASE: Operators the lexer knows but the parser does not
    #[test]
    fn test_edge_lexical_only_operators() {
        for op in ["->", ".", ";"] {
            let err = parse_str(&format!("1 {} 2", op)).unwrap_err();
            assert_eq!(err.message(), "Extraneous text after expression");
        }
    }

    /// EDGE CASE: Trailing comma
    #[test]
    fn test_edge_trailing_comma() {
        assert_eq!(
            parse_str("1, 2,").unwrap_err().message(),
            "Syntax error: unexpected end of input"
        );
        assert!(parse_str(", 1").is_err());
    }

    /// EDGE CASE: Keywords other than true/false
    #[test]
    fn test_edge_case_sensitive_booleans() {
        assert_eq!(
            parse_str("True").unwrap_err().message(),
            "Unexpected keyword: True"
        );
    }

    /// EDGE CASE: Octal-shaped literals keep their decimal reading
    #[test]
    fn test_edge_octal_quirk() {
        assert_eq!(parse_str("017").unwrap(), Expr::constant(17.0));
        assert_eq!(parse_str("00").unwrap(), Expr::constant(0.0));
    }

    /// EDGE CASE: Large hexadecimal literal
    #[test]
    fn test_edge_large_hex() {
        assert_eq!(
            parse_str("0xFFFFFFFF").unwrap(),
            Expr::Constant(Value::Number(4294967295.0))
        );
    }

    /// EDGE CASE: Comparison chains stay left-associative
    #[test]
    fn test_edge_comparison_chain() {
        match parse_str("1 < 2 < 3").unwrap() {
            Expr::Binary(b) => {
                assert_eq!(b.op, Operator::Less);
                assert!(matches!(*b.left, Expr::Binary(_)));
            },
            other => panic!("Expected Binary expression, got {:?}", other),
        }
    }

    /// EDGE CASE: Error location at end of a multi-line input
    #[test]
    fn test_edge_missing_closer_location() {
        let err = parse_str("(1,\n 2").unwrap_err();
        assert_eq!(err.location(), Some(Location::new(2, 3)));
    }

    /// EDGE CASE: Strings keep comment-like text and print it back
    #[test]
    fn test_edge_string_with_comment_text() {
        let expr = parse_str("'/* not a comment */' + \"// nor this\"").unwrap();
        assert_eq!(expr.to_string(), "(\"/* not a comment */\"+\"// nor this\")");
        assert_eq!(parse_str(&expr.to_string()).unwrap(), expr);
    }

    /// EDGE CASE: Escaped strings survive print and reparse
    #[test]
    fn test_edge_escaped_string_round_trip() {
        let expr = parse_str(r#"'tab\there\x01\\ \'q\' \"d\"'"#).unwrap();
        assert_eq!(parse_str(&expr.to_string()).unwrap(), expr);
    }
}
