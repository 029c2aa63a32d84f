use crate::parser::Parser;
use crate::utf8::satisfy;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Parser {
    satisfy(|c| c.is_ascii_digit())
}
