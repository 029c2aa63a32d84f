use crate::parser::Parser;
use crate::precheck::within_bounds;
use crate::result::ParseResult;
use crate::span::Span;

fn is_at_start(_text: &str, position: usize) -> ParseResult {
    if position == 0 {
        ParseResult::matched_empty(Span::empty(position))
    } else {
        ParseResult::mismatch(Span::empty(position))
    }
}

fn is_at_end(text: &str, position: usize) -> ParseResult {
    if position == text.len() {
        ParseResult::matched_empty(Span::empty(position))
    } else {
        ParseResult::mismatch(Span::empty(position))
    }
}

/// Zero-width check that succeeds only at the start of the input
pub fn at_start() -> Parser {
    Parser::with_precheck(is_at_start, within_bounds)
}

/// Zero-width check that succeeds only at the end of the input
pub fn at_end() -> Parser {
    Parser::with_precheck(is_at_end, within_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;

    #[test]
    fn test_at_start() {
        let result = at_start().run("abc", 0);
        assert_eq!(result.outcome, Outcome::Matched(None));
        assert_eq!(result.span, Span::empty(0));

        let result = at_start().run("abc", 1);
        assert!(result.is_error());
        assert_eq!(result.span, Span::empty(1));
    }

    #[test]
    fn test_at_end() {
        let result = at_end().run("abc", 3);
        assert_eq!(result.outcome, Outcome::Matched(None));
        assert_eq!(result.span, Span::empty(3));

        assert!(at_end().run("abc", 2).is_error());
    }

    #[test]
    fn test_empty_input_is_both_start_and_end() {
        assert!(at_start().run("", 0).is_success());
        assert!(at_end().run("", 0).is_success());
    }
}
