//! # CapComb - Capturing Parser Combinator Library
//!
//! CapComb builds text recognizers out of small parsers that compose into
//! larger ones. Every parser reports a [`ParseResult`]: a span of the input
//! and one of three outcomes, matched (with an optional nested [`Capture`]),
//! missed, or failed. An [`Engine`] drives a list of top-level parsers over an
//! input and collects every failure as a line-numbered [`ParsingError`]
//! instead of stopping at the first one.
//!
//! - **Captures, not values**: parsers capture nested text fragments; `join`
//!   flattens them and `map` is where callers impose their own structure
//! - **Backreferences**: [`same`] matches whatever another parser last captured
//! - **Zero panics**: bad positions are rejected by a bounds precheck and
//!   reported through the result
//!
//! ```
//! use capcomb::{Engine, chain, char, digit, some};
//!
//! let number = some(digit()).join().label("expected a number");
//! let mut engine = Engine::new();
//! engine.add_parsers([chain([number.clone(), char('+'), number])]);
//!
//! assert!(engine.run("12+34").is_success());
//! assert!(engine.run("12+x").is_error());
//! assert_eq!(engine.errors()[0].message, "expected a number");
//! ```

pub mod and;
pub mod ascii;
pub mod boundary;
pub mod capture;
pub mod chain;
pub mod choice;
pub mod cursor;
pub mod custom;
pub mod engine;
pub mod error;
pub mod lazy;
pub mod look;
pub mod many;
pub mod maybe;
pub mod not;
pub mod parser;
pub mod precheck;
pub mod result;
pub mod same;
pub mod span;
pub mod utf8;

pub use and::and;
pub use ascii::{digit, letter, lower_case_letter, upper_case_letter};
pub use boundary::{at_end, at_start};
pub use capture::{Capture, Fragment};
pub use chain::chain;
pub use choice::choice;
pub use cursor::Cursor;
pub use custom::custom;
pub use engine::{Engine, EngineOptions};
pub use error::{DependencyFault, Location, ParsingError};
pub use lazy::lazy;
pub use look::{ahead, behind, look};
pub use many::{at_least, many, some};
pub use maybe::maybe;
pub use not::not;
pub use parser::{DEFAULT_ERROR_LABEL, LastResult, Matcher, Parser};
pub use precheck::{Precheck, PrecheckResult, within_bounds};
pub use result::{Failure, FailureKind, Outcome, ParseResult};
pub use same::same;
pub use span::Span;
pub use utf8::{any, any_char, char, newline, satisfy, string};
