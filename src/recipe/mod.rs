pub mod error;
pub mod parser;
pub mod tokenizer;

pub use error::ParseError;
pub use parser::{ParsedDirective, parse_recipe};

#[cfg(test)]
mod tokenizer_tests;
