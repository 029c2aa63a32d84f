use crate::capture::Capture;
use crate::parser::{Matcher, Parser};
use crate::result::{Failure, Outcome, ParseResult};
use crate::span::Span;

/// Parser combinator that matches repeated occurrences of the given parser
///
/// Repetitions start where the previous one ended and their captures are
/// spliced, not nested, into one capture. Repetition stops at the end of the
/// input, at the first failure, or at an occurrence that captures nothing or
/// makes no progress.
///
/// With no repetitions the result is a miss. Fewer repetitions than `min` is a
/// failure.
pub struct Many {
    parser: Parser,
    min: usize,
}

impl Many {
    pub fn new(parser: Parser) -> Self {
        Many::at_least(parser, 0)
    }

    pub fn at_least(parser: Parser, min: usize) -> Self {
        Many { parser, min }
    }
}

impl Matcher for Many {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        let mut capture = Capture::new();
        let mut end = position;
        let mut count = 0;

        while end < text.len() {
            let result = self.parser.run(text, end);
            let next = result.span.end;
            match result.outcome {
                Outcome::Failed(failure) if failure.kind.is_fatal() => {
                    return ParseResult::failed(Span::new(position, end), failure);
                }
                Outcome::Matched(Some(repetition)) if !repetition.is_empty() => {
                    count += 1;
                    capture.append(repetition);
                    if next <= end {
                        break;
                    }
                    end = next;
                }
                _ => break,
            }
        }

        if count < self.min {
            ParseResult::failed(Span::new(position, end), Failure::mismatch())
        } else if count == 0 {
            ParseResult::missed(Span::empty(position))
        } else {
            ParseResult::matched(Span::new(position, end), capture)
        }
    }
}

/// Zero or more repetitions
pub fn many(parser: Parser) -> Parser {
    Parser::new(Many::new(parser))
}

/// One or more repetitions
pub fn some(parser: Parser) -> Parser {
    at_least(parser, 1)
}

/// `min` or more repetitions
pub fn at_least(parser: Parser, min: usize) -> Parser {
    Parser::new(Many::at_least(parser, min))
}

impl Parser {
    /// Zero or more repetitions of `self`
    pub fn many(self) -> Parser {
        many(self)
    }
}
