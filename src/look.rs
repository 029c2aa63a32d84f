use crate::cursor::Cursor;
use crate::parser::{Matcher, Parser};
use crate::result::{Failure, ParseResult};
use crate::span::Span;

/// Parser combinator that runs the given parser at a character offset from the
/// current position, without consuming anything
///
/// The result keeps the inner parser's success or failure, but is zero-width
/// at the current position and never carries a capture. An offset that lands
/// before the start of the input is a rejection.
pub struct Look {
    parser: Parser,
    offset: isize,
}

impl Look {
    pub fn new(parser: Parser, offset: isize) -> Self {
        Look { parser, offset }
    }
}

impl Matcher for Look {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let Some(target) = Cursor::new(text, position).shift(self.offset) else {
            return ParseResult::failed(
                Span::empty(position),
                Failure::rejected(format!(
                    "looking {} characters from position {} leaves the input",
                    self.offset, position
                )),
            );
        };

        let result = self.parser.run(text, target.position()).without_capture();
        ParseResult {
            span: Span::empty(position),
            outcome: result.outcome,
        }
    }
}

/// Run `parser` `offset` characters away from the current position
pub fn look(parser: Parser, offset: isize) -> Parser {
    Parser::new(Look::new(parser, offset))
}

/// Peek at the next character
pub fn ahead(parser: Parser) -> Parser {
    look(parser, 1)
}

/// Peek at the previous character
pub fn behind(parser: Parser) -> Parser {
    look(parser, -1)
}
