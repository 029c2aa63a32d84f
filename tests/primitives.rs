//! Primitive matchers in isolation: character classes, literals, boundaries
//! and the bounds precheck they all share

use capcomb::{
    Capture, FailureKind, Outcome, Parser, Span, any, any_char, at_end, at_start, char, digit,
    letter, lower_case_letter, newline, not, satisfy, string, upper_case_letter,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest(parser => [
    letter(),
    upper_case_letter(),
    lower_case_letter(),
    digit(),
    char('a'),
    newline(),
    any(1),
    any_char(),
    string("ab"),
    satisfy(|c: char| c.is_whitespace()),
    at_start(),
    at_end(),
    not(digit())
])]
fn test_position_past_end_is_rejected(parser: Parser) {
    let result = parser.run("ab", 3);

    assert_eq!(result.span, Span::empty(3));
    assert_eq!(result.failure().map(|failure| failure.kind), Some(FailureKind::Rejected));
    assert_eq!(
        result.message(),
        Some("input length (2) exceeded by checked position (3)")
    );
}

#[rstest]
#[case::letter(letter(), "q", true)]
#[case::letter_rejects_digit(letter(), "1", false)]
#[case::upper(upper_case_letter(), "Q", true)]
#[case::upper_rejects_lower(upper_case_letter(), "q", false)]
#[case::lower(lower_case_letter(), "q", true)]
#[case::lower_rejects_upper(lower_case_letter(), "Q", false)]
#[case::digit(digit(), "7", true)]
#[case::digit_rejects_letter(digit(), "x", false)]
#[case::newline(newline(), "\n", true)]
#[case::newline_rejects_carriage_return(newline(), "\r", false)]
#[case::char_unicode(char('ß'), "ß", true)]
#[case::whitespace(satisfy(|c: char| c.is_whitespace()), "\t", true)]
fn test_single_character_classes(#[case] parser: Parser, #[case] input: &str, #[case] matches: bool) {
    let result = parser.run(input, 0);

    assert_eq!(result.is_success(), matches);
    assert_eq!(result.is_error(), !matches);
    if matches {
        assert_eq!(result.capture(), Some(&Capture::text(input)));
        assert_eq!(result.span, Span::new(0, input.len()));
    } else {
        assert!(result.capture().is_none());
    }
}

#[test]
fn test_string_literal() {
    let result = string("abc").run("abcdef", 0);
    assert!(result.is_success());
    assert_eq!(result.end(), 3);
    assert_eq!(result.capture(), Some(&Capture::from_texts(["a", "b", "c"])));
}

#[test]
fn test_any_takes_a_window() {
    let result = any(3).run("abcdef", 1);
    assert_eq!(result.capture(), Some(&Capture::text("bcd")));
    assert_eq!(result.span, Span::new(1, 4));
}

#[test]
fn test_any_must_end_before_input_end() {
    assert!(any(2).run("abc", 0).is_success());
    assert!(any(3).run("abc", 0).is_error());
    assert!(any_char().run("a", 0).is_error());
}

#[test]
fn test_boundaries_are_zero_width() {
    let text = "ab";

    let start = at_start().run(text, 0);
    assert_eq!(start.outcome, Outcome::Matched(None));
    assert_eq!(start.span, Span::empty(0));
    assert!(at_start().run(text, 1).is_error());

    let end = at_end().run(text, 2);
    assert_eq!(end.outcome, Outcome::Matched(None));
    assert!(at_end().run(text, 1).is_error());
}

#[test]
fn test_matching_at_end_of_input_fails_without_rejection() {
    let result = letter().run("ab", 2);
    assert_eq!(result.failure().map(|failure| failure.kind), Some(FailureKind::Mismatch));
    assert_eq!(result.span, Span::empty(2));
}
