use crate::capture::Capture;
use crate::parser::{Matcher, Parser};
use crate::result::{Outcome, ParseResult};
use crate::span::Span;

/// Parser combinator that runs parsers one after another, each starting where
/// the previous one ended
///
/// Each child's capture is kept as a nested group, in order. The first hard
/// failure aborts the chain; its span then ends where the last successful
/// child ended. Children that miss consume nothing and capture nothing.
pub struct Chain {
    parsers: Vec<Parser>,
}

impl Chain {
    pub fn new(parsers: impl IntoIterator<Item = Parser>) -> Self {
        Chain {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl Matcher for Chain {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let mut capture = Capture::new();
        let mut cursor = position;

        for parser in &self.parsers {
            let result = parser.run(text, cursor);
            match result.outcome {
                Outcome::Failed(failure) => {
                    return ParseResult::failed(Span::new(position, cursor), failure);
                }
                Outcome::Matched(matched) => {
                    if let Some(child) = matched.filter(|child| !child.is_empty()) {
                        capture.push_group(child);
                    }
                    cursor = result.span.end;
                }
                Outcome::Missed => {}
            }
        }

        let span = Span::new(position, cursor);
        if capture.is_empty() {
            ParseResult::missed(span)
        } else {
            ParseResult::matched(span, capture)
        }
    }
}

/// Convenience function to create a Chain parser
pub fn chain(parsers: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Chain::new(parsers))
}
