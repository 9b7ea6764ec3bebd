//! Derivix - parse infix arithmetic, then evaluate, simplify and differentiate it
//!
//! Text is split into tokens by [`scanner`], turned into an [`Expression`]
//! tree by [`parser`], and transformed by the methods on [`Expression`].
//! [`session`] ties these together into one round of the interactive
//! dialogue.

pub mod expression;
pub mod parser;
pub mod scanner;
pub mod session;

// Re-export the main public API
pub use expression::{DEFAULT_VARIABLE, Expression, ExpressionError, Operator};
pub use parser::{ParseError, Parser, parse, parse_str};
pub use scanner::{Token, tokenize};
pub use session::{Report, Session, SessionError, SessionOptions, Value};

/// Simplified derivative of `input` with respect to `variable`
///
/// The input is parsed and simplified, differentiated, and the derivative is
/// simplified again.
///
/// # Errors
///
/// Returns an error if `input` is not a complete expression.
///
/// # Examples
///
/// ```
/// use derivix::derivative;
///
/// match derivative("x * x", "x") {
///     Ok(expr) => assert_eq!(expr.to_string(), "(x + x)"),
///     Err(e) => panic!("{}", e),
/// }
/// ```
pub fn derivative(input: &str, variable: &str) -> Result<Expression, ParseError> {
    let expr = parse_str(input)?;
    Ok(expr.simplify().differentiate(variable).simplify())
}
