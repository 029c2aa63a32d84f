pub mod character;
pub mod string;

pub use character::{any, any_char, char, newline, satisfy};
pub use string::string;
