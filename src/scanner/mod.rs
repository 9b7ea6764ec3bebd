//! Token source: splits a line of text into numbers, identifiers and symbols

mod lexer;
mod token;

pub use lexer::{is_identifier, tokenize};
pub use token::{Token, format_tokens};
