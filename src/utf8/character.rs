use crate::capture::Capture;
use crate::cursor::Cursor;
use crate::parser::{Matcher, Parser};
use crate::precheck::within_bounds;
use crate::result::ParseResult;
use crate::span::Span;

/// Matcher for a single character accepted by a predicate
///
/// A failed attempt spans the character it examined, or nothing at the end
/// of the input.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<F> Matcher for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let cursor = Cursor::new(text, position);
        match cursor.value() {
            Some(found) => {
                let span = Span::new(position, cursor.next().position());
                if (self.predicate)(found) {
                    ParseResult::matched(span, Capture::text(found))
                } else {
                    ParseResult::mismatch(span)
                }
            }
            None => ParseResult::mismatch(Span::empty(position)),
        }
    }
}

/// Matches one character for which `predicate` holds
pub fn satisfy<F>(predicate: F) -> Parser
where
    F: Fn(char) -> bool + 'static,
{
    Parser::with_precheck(Satisfy::new(predicate), within_bounds)
}

/// Matches exactly the character `expected`
pub fn char(expected: char) -> Parser {
    satisfy(move |found| found == expected)
}

/// Matches a line feed. Pairs well with lookahead, e.g. `ahead(newline())`
pub fn newline() -> Parser {
    char('\n')
}

/// Matcher capturing a fixed number of arbitrary characters as one fragment
pub struct AnyParser {
    count: usize,
}

impl AnyParser {
    pub fn new(count: usize) -> Self {
        AnyParser { count }
    }
}

impl Matcher for AnyParser {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let end = Cursor::new(text, position)
            .advance_within(self.count)
            .position();
        // The window must end strictly before the end of the input
        match text.get(position..end) {
            Some(taken) if end < text.len() => {
                ParseResult::matched(Span::new(position, end), Capture::text(taken))
            }
            _ => ParseResult::mismatch(Span::new(position, text.len())),
        }
    }
}

/// Captures `count` characters, whatever they are
pub fn any(count: usize) -> Parser {
    Parser::with_precheck(AnyParser::new(count), within_bounds)
}

/// Captures a single arbitrary character
pub fn any_char() -> Parser {
    any(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FailureKind;

    #[test]
    fn test_char_matches() {
        let result = char('x').run("xyz", 0);
        assert!(result.is_success());
        assert_eq!(result.span, Span::new(0, 1));
        assert_eq!(result.capture(), Some(&Capture::text("x")));
    }

    #[test]
    fn test_char_mismatch_spans_examined_char() {
        let result = char('x').run("abc", 1);
        assert!(result.is_error());
        assert_eq!(result.span, Span::new(1, 2));
        assert_eq!(result.failure().unwrap().kind, FailureKind::Mismatch);
    }

    #[test]
    fn test_char_is_case_sensitive() {
        assert!(char('a').run("A", 0).is_error());
    }

    #[test]
    fn test_char_at_end_of_input() {
        let result = char('a').run("a", 1);
        assert!(result.is_error());
        assert_eq!(result.span, Span::empty(1));
    }

    #[test]
    fn test_char_multibyte() {
        let result = char('é').run("aé!", 1);
        assert!(result.is_success());
        assert_eq!(result.span, Span::new(1, 3));
        assert_eq!(result.capture(), Some(&Capture::text("é")));
    }

    #[test]
    fn test_newline() {
        assert!(newline().run("a\nb", 1).is_success());
        assert!(newline().run("a\nb", 0).is_error());
    }

    #[test]
    fn test_satisfy_custom_class() {
        let vowel = satisfy(|c| "aeiou".contains(c));
        assert!(vowel.run("e", 0).is_success());
        assert!(vowel.run("x", 0).is_error());
    }

    #[test]
    fn test_any_captures_one_fragment() {
        let result = any(3).run("abcdef", 1);
        assert!(result.is_success());
        assert_eq!(result.span, Span::new(1, 4));
        assert_eq!(result.capture(), Some(&Capture::text("bcd")));
    }

    #[test]
    fn test_any_cannot_reach_end_of_input() {
        let result = any(3).run("abc", 0);
        assert!(result.is_error());
        assert_eq!(result.span, Span::new(0, 3));

        assert!(any_char().run("ab", 1).is_error());
        assert!(any_char().run("ab", 0).is_success());
    }

    #[test]
    fn test_any_with_huge_count_fails_fast() {
        let result = any(usize::MAX).run("abc", 0);
        assert!(result.is_error());
        assert_eq!(result.span, Span::new(0, 3));
    }

    #[test]
    fn test_any_counts_characters() {
        let result = any(2).run("αβγ", 0);
        assert_eq!(result.capture(), Some(&Capture::text("αβ")));
        assert_eq!(result.end(), 4);
    }

    #[test]
    fn test_bounds_precheck() {
        let result = char('a').run("a", 2);
        assert_eq!(result.failure().unwrap().kind, FailureKind::Rejected);
        assert!(result.message().unwrap().contains("exceeded"));
    }
}
