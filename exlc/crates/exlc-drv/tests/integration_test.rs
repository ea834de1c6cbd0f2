use exlc_drv::{Config, EmitType, Session, Summary};
use std::io::Cursor;

fn run_repl(config: Config, input: &str) -> (String, String, Summary) {
    let mut session = Session::new(config);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = session
        .repl(Cursor::new(input), &mut out, &mut err)
        .expect("REPL failed on in-memory streams");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        summary,
    )
}

#[test]
fn test_session_matches_reference_results() {
    let input = "\
5 * (2 + 3)
10 % 3
1 << 4
~0
'abc' < 'abd'
'12' == 12
true + 1
1, 2, 3
(1 + 2) * 3 == 9 ? 'nine' : 'other'
";
    let (out, err, summary) = run_repl(Config::default(), input);

    let expected = "\
(5*(2+3)) => 25
(10%3) => 1
(1<<4) => 16
(~0) => -1
(\"abc\"<\"abd\") => true
(\"12\"==12) => true
(true+1) => 2
1,2,3 => 3
((((1+2)*3)==9)?\"nine\":\"other\") => \"nine\"
";
    assert_eq!(out, expected);
    assert!(err.is_empty(), "unexpected errors: {err}");
    assert_eq!(summary, Summary { evaluated: 9, failed: 0 });
}

#[test]
fn test_session_comments_span_nothing_across_lines() {
    // Each line is its own source, so a block comment cannot run on.
    let (out, err, summary) = run_repl(Config::default(), "1 /* open\n2 */ 3\n");
    assert!(out.is_empty());
    assert!(err.contains("Unterminated comment"));
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_session_ast_mode_does_not_evaluate() {
    let mut config = Config::default();
    config.output.emit = EmitType::Ast;
    let (out, err, summary) = run_repl(config, "1 = 2 ? 3 : 4\n");
    assert!(err.is_empty());
    assert_eq!(out, "(1=(2?3:4))\n");
    assert!(summary.success());
}

#[test]
fn test_session_reports_every_failure_when_continuing() {
    let mut config = Config::default();
    config.repl.stop_on_error = false;
    config.repl.echo = false;

    let (out, err, summary) = run_repl(config, "1 += 1\n-'x'\n[4]\n08\n");

    assert_eq!(out, "4\n");
    let errors: Vec<_> = err.lines().collect();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0], "error: Not implemented: +=");
    assert!(errors[1].starts_with("error: Invalid conversion to number"));
    assert!(errors[2].starts_with("error: "));
    assert_eq!(summary, Summary { evaluated: 4, failed: 3 });
}
