use crate::parser::{Matcher, Parser};
use crate::result::ParseResult;
use crate::span::Span;

/// Parser combinator that makes the given parser optional
///
/// A failure of the inner parser becomes a zero-width miss, so downstream
/// combinators never see an optional parser as a hard failure. Matches pass
/// through unchanged. Fatal failures are not forgiven.
pub struct Maybe {
    parser: Parser,
}

impl Maybe {
    pub fn new(parser: Parser) -> Self {
        Maybe { parser }
    }
}

impl Matcher for Maybe {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let result = self.parser.run(text, position);
        if result.is_error() && !result.is_fatal() {
            ParseResult::missed(Span::empty(position))
        } else {
            result
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe(parser: Parser) -> Parser {
    Parser::new(Maybe::new(parser))
}

impl Parser {
    /// Make `self` optional
    pub fn maybe(self) -> Parser {
        maybe(self)
    }
}
