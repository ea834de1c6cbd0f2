//! Edge case tests for exlc-eval

#[cfg(test)]
mod tests {
    use crate::{eval_str, Context, Value};
    use exlc_lex::{Lexer, Source};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_mixed_kind_equality() {
        assert_eq!(eval_str("'1' == 1").unwrap(), Value::Boolean(true));
        assert_eq!(eval_str("'1.0' == 1").unwrap(), Value::Boolean(false));
        assert_eq!(eval_str("true == 1").unwrap(), Value::Boolean(true));
        assert_eq!(eval_str("'true' == true").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn test_edge_number_text_in_strings() {
        assert_eq!(eval_str("'x' + 0.5").unwrap(), Value::from("x0.5"));
        assert_eq!(eval_str("'x' + 1 / 4").unwrap(), Value::from("x0.25"));
        assert_eq!(eval_str("'' + 2 * 3").unwrap(), Value::from("6"));
    }

    #[test]
    fn test_edge_unary_coerces_strings() {
        assert_eq!(eval_str("-'3'").unwrap(), Value::Number(-3.0));
        assert_eq!(eval_str("+' 0x10'").unwrap(), Value::Number(16.0));
        assert_eq!(
            eval_str("-'3x'").unwrap_err().message(),
            "Invalid conversion to number: '3x'"
        );
    }

    #[test]
    fn test_edge_not_of_strings() {
        assert_eq!(eval_str("!'false'").unwrap(), Value::Boolean(true));
        assert_eq!(eval_str("!'0'").unwrap(), Value::Boolean(false));
        assert_eq!(eval_str("!''").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn test_edge_division_by_zero() {
        assert_eq!(eval_str("1 / 0").unwrap(), Value::Number(f64::INFINITY));
        assert!(matches!(eval_str("0 / 0").unwrap(), Value::Number(n) if n.is_nan()));
        assert!(matches!(eval_str("1 % 0").unwrap(), Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_edge_large_numbers_truncate_for_bit_ops() {
        assert_eq!(eval_str("0xFFFFFFFF & 1").unwrap(), Value::Number(1.0));
        assert_eq!(eval_str("~0xFFFFFFFF").unwrap(), Value::Number(0.0));
        assert_eq!(eval_str("0xFFFFFFFF | 0").unwrap(), Value::Number(-1.0));
        assert_eq!(eval_str("0x80000000 >> 31").unwrap(), Value::Number(-1.0));
    }

    #[test]
    fn test_edge_number_text_is_shortest_round_trip() {
        assert_eq!(
            eval_str("'x' + (0.1 + 0.2)").unwrap(),
            Value::from("x0.30000000000000004")
        );
        assert_eq!(eval_str("'' + 1 / 4").unwrap(), Value::from("0.25"));
    }

    #[test]
    fn test_edge_deep_input_is_an_error() {
        let source = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
        assert_eq!(
            eval_str(&source).unwrap_err().message(),
            "Expression nested too deeply"
        );
    }

    #[test]
    fn test_edge_ternary_with_sequences() {
        assert_eq!(eval_str("true ? 1, 2 : 3, 4").unwrap(), Value::Number(2.0));
        assert_eq!(eval_str("false ? 1, 2 : 3, 4").unwrap(), Value::Number(4.0));
        assert_eq!(eval_str("(1, 0) ? 'a' : 'b'").unwrap(), Value::from("b"));
    }

    #[test]
    fn test_edge_logical_ops_evaluate_both_sides() {
        // No short circuit: the failing right operand is still evaluated.
        assert!(eval_str("false && true + true").is_err());
        assert!(eval_str("true || 'a' - 1").is_err());
    }

    #[test]
    fn test_edge_octal_quirk() {
        assert_eq!(eval_str("010 + 1").unwrap(), Value::Number(11.0));
        assert!(eval_str("08").is_err());
    }

    #[test]
    fn test_edge_chained_comparisons() {
        // (3 > 2) is true, then true > 1 compares 1 > 1.
        assert_eq!(eval_str("3 > 2 > 1").unwrap(), Value::Boolean(false));
    }

    #[test]
    fn test_edge_evaluate_from_custom_stream() {
        let chars = "'multi\nline' + 1".chars().collect::<Vec<_>>().into_iter();
        let mut lexer = Lexer::new(Source::new(chars).unwrap());
        let expr = exlc_par::compile(&mut lexer).unwrap();
        assert_eq!(
            Context::new().evaluate(&expr).unwrap(),
            Value::from("multi\nline1")
        );
    }

    #[test]
    fn test_edge_display_of_results() {
        assert_eq!(eval_str("2 * 4 + 5").unwrap().to_string(), "13");
        assert_eq!(eval_str("'foo' + 'bar'").unwrap().to_string(), "\"foobar\"");
        assert_eq!(eval_str("1 < 2").unwrap().to_string(), "true");
        assert_eq!(eval_str("7 / 2").unwrap().to_string(), "3.5");
    }
}
