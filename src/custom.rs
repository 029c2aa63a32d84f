use crate::parser::{Matcher, Parser};
use crate::precheck::Precheck;

/// Wrap a caller-supplied matcher and precheck as a [`Parser`]
///
/// The result takes part in labels, join/split, mapping and backreferences
/// like any built-in parser.
pub fn custom(matcher: impl Matcher + 'static, precheck: impl Precheck + 'static) -> Parser {
    Parser::with_precheck(matcher, precheck)
}
