use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("This is not an expression: {0}")]
    Parse(#[from] ParseError),
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] ExpressionError),
    #[error("Differentiation variable must be an identifier: '{0}'")]
    InvalidVariable(String),
}
