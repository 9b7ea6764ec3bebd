use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fully parenthesized infix form, e.g. `((1 - 2) - 3)`. Parsing the output
/// again yields an equal tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}
