use crate::parser::{Matcher, Parser};
use crate::result::{Outcome, ParseResult};
use crate::span::Span;

/// Parser combinator that tries each parser at the same position and adopts
/// the first one that matches
///
/// Children that miss or fail are skipped; there is no backtracking beyond
/// moving on to the next sibling. When nothing matches, the last attempted
/// result is returned. Fatal failures end the choice immediately.
pub struct Choice {
    parsers: Vec<Parser>,
}

impl Choice {
    pub fn new(parsers: impl IntoIterator<Item = Parser>) -> Self {
        Choice {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl Matcher for Choice {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let mut last = ParseResult::missed(Span::empty(position));

        for parser in &self.parsers {
            let result = parser.run(text, position);
            if matches!(result.outcome, Outcome::Matched(_)) || result.is_fatal() {
                return result;
            }
            last = result;
        }

        last.without_capture()
    }
}

/// Convenience function to create a Choice parser
pub fn choice(parsers: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Choice::new(parsers))
}

impl Parser {
    /// Try `self`, and if it does not match, `other`
    pub fn or(self, other: Parser) -> Parser {
        choice([self, other])
    }
}
