#![allow(clippy::uninlined_format_args)]

use relang::{Error, Regex};

#[track_caller]
fn test_1_error(pattern: &str, expected_err: &str) {
    let res = pattern.parse::<Regex>();
    assert!(res.is_err(), "Pattern should not have parsed: {}", pattern);

    let err = match res.err().unwrap() {
        Error::Syntax(text) => text,
        other => panic!("Expected a syntax error, got {:?}", other),
    };
    assert!(
        err.contains(expected_err),
        "Error text '{}' did not contain '{}' for pattern '{}'",
        err,
        expected_err,
        pattern
    );
}

#[test]
fn test_syntax_errors() {
    test_1_error(r"*", "Invalid atom character");
    test_1_error(r"a|*", "Invalid atom character");
    test_1_error(r"(*)", "Invalid atom character");
    test_1_error(r"}", "Invalid atom character");

    test_1_error(r"(", "Unbalanced parenthesis");
    test_1_error(r"(a|b", "Unbalanced parenthesis");
    test_1_error(r")", "Unbalanced parenthesis");
    test_1_error(r"a)b", "Unbalanced parenthesis");
    test_1_error(r"((a)", "Unbalanced parenthesis");

    test_1_error(r"\", "Incomplete escape");
    test_1_error(r"a\", "Incomplete escape");

    test_1_error(r"{ab", "Unbalanced brace");
    test_1_error(r"{}", "Empty symbol");
}

#[test]
fn test_valid_edge_cases() {
    for pattern in ["", "&", "()", "a|", "|a", "(|)", "a**", "\\(", "{ab}", "{*}", " a ( b ) "] {
        assert!(pattern.parse::<Regex>().is_ok(), "Pattern should have parsed: {}", pattern);
    }
}
