use log::debug;

use crate::expression::ast::{Expression, Operator};

/// Variable used when none is given
pub const DEFAULT_VARIABLE: &str = "x";

impl Expression {
    /// Derivative with respect to `variable`, as a new tree.
    ///
    /// Any other identifier is treated as a constant. The product and quotient
    /// rules need the original operands twice; they are cloned, so the result
    /// shares no nodes with `self`. The result is not simplified.
    pub fn differentiate(&self, variable: &str) -> Expression {
        debug!("Differentiating {} with respect to {}", self, variable);
        let derivative = Differentiator { variable }.derive(self);
        debug!("Derivative: {}", derivative);
        derivative
    }
}

struct Differentiator<'a> {
    variable: &'a str,
}

impl Differentiator<'_> {
    fn derive(&self, expr: &Expression) -> Expression {
        match expr {
            Expression::Number(_) => Expression::Number(0),
            Expression::Identifier(name) if name == self.variable => Expression::Number(1),
            Expression::Identifier(_) => Expression::Number(0),
            Expression::Binary(op @ (Operator::Add | Operator::Sub), l, r) => {
                Expression::binary(*op, self.derive(l), self.derive(r))
            }
            Expression::Binary(Operator::Mul, l, r) => self.product_rule(l, r),
            Expression::Binary(Operator::Div, l, r) => self.quotient_rule(l, r),
        }
    }

    // (l * r)' = l' * r + l * r'
    fn product_rule(&self, l: &Expression, r: &Expression) -> Expression {
        Expression::binary(
            Operator::Add,
            Expression::binary(Operator::Mul, self.derive(l), r.clone()),
            Expression::binary(Operator::Mul, l.clone(), self.derive(r)),
        )
    }

    // (l / r)' = (l' * r - l * r') / (r * r)
    fn quotient_rule(&self, l: &Expression, r: &Expression) -> Expression {
        Expression::binary(
            Operator::Div,
            Expression::binary(
                Operator::Sub,
                Expression::binary(Operator::Mul, self.derive(l), r.clone()),
                Expression::binary(Operator::Mul, l.clone(), self.derive(r)),
            ),
            Expression::binary(Operator::Mul, r.clone(), r.clone()),
        )
    }
}
