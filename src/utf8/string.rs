use crate::capture::Capture;
use crate::cursor::Cursor;
use crate::parser::{Matcher, Parser};
use crate::precheck::within_bounds;
use crate::result::ParseResult;
use crate::span::Span;
use std::borrow::Cow;

/// Match `literal` exactly at `position`
///
/// The capture splits the literal into one fragment per character. A failed
/// attempt spans as many characters as the literal has, clamped to the input.
pub(crate) fn match_literal(text: &str, position: usize, literal: &str) -> ParseResult {
    let found = text
        .get(position..)
        .is_some_and(|rest| rest.starts_with(literal));

    if found {
        ParseResult::matched(
            Span::new(position, position + literal.len()),
            Capture::chars(literal),
        )
    } else {
        let end = Cursor::new(text, position)
            .advance_within(literal.chars().count())
            .position();
        ParseResult::mismatch(Span::new(position, end))
    }
}

/// Matcher for an exact string, compared case-sensitively
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Matcher for IsStringParser {
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        match_literal(text, position, &self.expected)
    }
}

/// Matches the whole of `expected` at the current position
pub fn string(expected: impl Into<Cow<'static, str>>) -> Parser {
    Parser::with_precheck(IsStringParser::new(expected), within_bounds)
}
