use crate::parser::{LastResult, Matcher, Parser};
use crate::result::{Failure, ParseResult};
use crate::span::Span;
use crate::utf8::string::match_literal;
use tracing::debug;

/// Backreference: matches exactly the text another parser last captured
///
/// The dependency must have run earlier against the same input and captured
/// something. Otherwise the result is a fatal dependency failure, which no
/// permissive combinator swallows.
pub struct Same {
    dependency: LastResult,
}

impl Same {
    pub fn new(dependency: &Parser) -> Self {
        Same {
            dependency: dependency.last_result_handle(),
        }
    }
}

impl Matcher for Same {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        match self.dependency.capture_text(text) {
            Ok(literal) => match_literal(text, position, &literal),
            Err(fault) => {
                debug!(%fault, position, "backreference has nothing to match");
                ParseResult::failed(Span::empty(position), Failure::dependency(fault))
            }
        }
    }
}

/// Convenience function to create a Same parser
pub fn same(dependency: &Parser) -> Parser {
    Parser::new(Same::new(dependency))
}
