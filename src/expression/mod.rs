//! Expression tree and the transformations defined over it

mod ast;
mod differentiate;
mod display;
mod errors;
mod eval;
mod simplify;

pub use ast::{Expression, Operator};
pub use differentiate::DEFAULT_VARIABLE;
pub use errors::ExpressionError;

#[cfg(test)]
mod proptests;
