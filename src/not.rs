use crate::capture::Capture;
use crate::parser::{Matcher, Parser};
use crate::precheck::within_bounds;
use crate::result::ParseResult;
use crate::span::Span;

/// Parser combinator that inverts the given parser
///
/// Succeeds when the inner parser does not match, capturing the input the
/// inner parser examined. Fails, without a capture, when the inner parser
/// matches. Fatal failures pass through.
pub struct Not {
    parser: Parser,
}

impl Not {
    pub fn new(parser: Parser) -> Self {
        Not { parser }
    }
}

impl Matcher for Not {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let result = self.parser.run(text, position);
        if result.is_fatal() {
            return result;
        }

        let span = Span::new(position, result.span.end.min(text.len()));
        if result.is_success() {
            return ParseResult::mismatch(span);
        }

        let examined = span.slice(text);
        if examined.is_empty() {
            ParseResult::matched_empty(Span::empty(position))
        } else {
            ParseResult::matched(span, Capture::text(examined))
        }
    }
}

/// Convenience function to create a Not parser
pub fn not(parser: Parser) -> Parser {
    Parser::with_precheck(Not::new(parser), within_bounds)
}
