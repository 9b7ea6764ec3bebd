//! Recursive-descent parser for infix expressions
//!
//! ```text
//! Expression := Term { ('+' | '-') Term }
//! Term       := Factor { ('*' | '/') Factor }
//! Factor     := Number | Identifier | '(' Expression ')'
//! ```

mod core;
mod cursor;
mod errors;

pub use self::core::{DEFAULT_MAX_DEPTH, Parser};
pub use cursor::TokenCursor;
pub use errors::ParseError;

use crate::expression::Expression;
use crate::scanner::{Token, tokenize};

/// Parse a complete token sequence with the default nesting limit
///
/// # Errors
///
/// Returns an error if the tokens do not form exactly one expression.
pub fn parse(tokens: &[Token]) -> Result<Expression, ParseError> {
    Parser::new().parse(tokens)
}

/// Tokenize and parse `input`
///
/// # Errors
///
/// Returns an error if the text does not form exactly one expression.
pub fn parse_str(input: &str) -> Result<Expression, ParseError> {
    parse(&tokenize(input))
}
