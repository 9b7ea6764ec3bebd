use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Expression is not numerical: identifier '{name}' has no value")]
    NonNumerical { name: String },
}
