use crate::capture::Capture;
use crate::parser::{Matcher, Parser};
use crate::result::{Outcome, ParseResult};
use crate::span::Span;

/// Parser combinator that requires every parser to match at the same position
///
/// `And` is a same-position gate, not a capture accumulator: all children
/// start at the original position, and only the last child's non-empty
/// capture is kept. Earlier sibling captures only decide whether the gate
/// opens. The span ends where the child whose capture was kept ended.
///
/// Any hard failure aborts with that failure; any miss makes the whole
/// conjunction a miss.
///
/// Example: a lowercase letter that is not a vowel
/// ```
/// use capcomb::{and, lower_case_letter, not, satisfy, Capture};
///
/// let consonant = and([not(satisfy(|c| "aeiou".contains(c))), lower_case_letter()]);
/// let result = consonant.run("k", 0);
/// assert_eq!(result.capture(), Some(&Capture::text("k")));
/// assert!(consonant.run("e", 0).is_error());
/// ```
pub struct And {
    parsers: Vec<Parser>,
}

impl And {
    pub fn new(parsers: impl IntoIterator<Item = Parser>) -> Self {
        And {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl Matcher for And {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        if self.parsers.is_empty() {
            return ParseResult::missed(Span::empty(position));
        }

        let mut kept: Option<(Capture, usize)> = None;
        let mut missed = false;

        for parser in &self.parsers {
            let result = parser.run(text, position);
            if result.is_error() {
                return result;
            }
            let end = result.span.end;
            match result.outcome {
                Outcome::Matched(Some(capture)) if !capture.is_empty() => {
                    kept = Some((capture, end));
                }
                Outcome::Missed => missed = true,
                Outcome::Matched(_) | Outcome::Failed(_) => {}
            }
        }

        if missed {
            return ParseResult::missed(Span::empty(position));
        }
        match kept {
            Some((capture, end)) => ParseResult::matched(Span::new(position, end), capture),
            None => ParseResult::matched_empty(Span::empty(position)),
        }
    }
}

/// Convenience function to create an And parser
pub fn and(parsers: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(And::new(parsers))
}
