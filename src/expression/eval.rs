use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// True when the tree contains no identifiers
    pub fn is_numerical(&self) -> bool {
        match self {
            Expression::Number(_) => true,
            Expression::Identifier(_) => false,
            Expression::Binary(_, l, r) => l.is_numerical() && r.is_numerical(),
        }
    }

    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Evaluation of a tree that contains an identifier (check
    ///   [`is_numerical`](Self::is_numerical) first)
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = self.value();

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn value(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n as f64),
            Expression::Identifier(name) => {
                debug!("Identifier '{}' reached during evaluation", name);
                Err(ExpressionError::NonNumerical { name: name.clone() })
            }
            Expression::Binary(op, l, r) => {
                let left = l.value()?;
                let right = r.value()?;
                match op {
                    Operator::Add => Ok(left + right),
                    Operator::Sub => Ok(left - right),
                    Operator::Mul => Ok(left * right),
                    Operator::Div => {
                        // matches -0.0 too
                        if right == 0.0 {
                            debug!("Division by zero attempted: {} / {}", l, r);
                            Err(ExpressionError::DivisionByZero)
                        } else {
                            Ok(left / right)
                        }
                    }
                }
            }
        }
    }
}
