pub mod digit;
pub mod letter;

pub use digit::digit;
pub use letter::{letter, lower_case_letter, upper_case_letter};
