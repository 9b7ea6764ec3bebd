use thiserror::Error;

/// Errors that abandon a parse. No partial tree is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { position: usize, found: String },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Parenthesis opened at position {position} is never closed")]
    UnclosedParenthesis { position: usize },
    #[error("Number {value} at position {position} is not a supported integer")]
    InvalidNumber { position: usize, value: f64 },
    #[error("Expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
