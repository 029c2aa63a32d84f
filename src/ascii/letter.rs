use crate::parser::Parser;
use crate::utf8::satisfy;

/// Parser that matches a single ASCII letter, either case
pub fn letter() -> Parser {
    satisfy(|c| c.is_ascii_alphabetic())
}

/// Parser that matches a single ASCII uppercase letter (A-Z)
pub fn upper_case_letter() -> Parser {
    satisfy(|c| c.is_ascii_uppercase())
}

/// Parser that matches a single ASCII lowercase letter (a-z)
pub fn lower_case_letter() -> Parser {
    satisfy(|c| c.is_ascii_lowercase())
}
