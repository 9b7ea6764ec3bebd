use log::{debug, trace};

use crate::expression::ast::{Expression, Operator};

impl Expression {
    /// Remove additive zeros, multiplicative ones and zero products.
    ///
    /// Children are simplified first, then at most one identity is applied at
    /// each node:
    ///
    /// | operator | condition   | result |
    /// |----------|-------------|--------|
    /// | `+`      | left is 0   | right  |
    /// | `+`      | right is 0  | left   |
    /// | `-`      | right is 0  | left   |
    /// | `*`      | left is 0   | 0      |
    /// | `*`      | right is 0  | 0      |
    /// | `*`      | left is 1   | right  |
    /// | `*`      | right is 1  | left   |
    /// | `/`      | left is 0   | 0      |
    /// | `/`      | right is 1  | left   |
    ///
    /// The substituted child is not revisited. Since it was already simplified
    /// and the identities only look at literal children, one pass reaches a
    /// fixed point: simplifying the result again changes nothing.
    ///
    /// Note that `0 / 0` simplifies to `0`, and a zero product swallows
    /// whatever the other factor was, including a division by zero.
    pub fn simplify(self) -> Expression {
        debug!("Simplifying expression: {}", self);
        let simplified = self.simplify_node();
        debug!("Simplified to: {}", simplified);
        simplified
    }

    fn simplify_node(self) -> Expression {
        match self {
            Expression::Binary(op, l, r) => {
                let left = l.simplify_node();
                let right = r.simplify_node();
                apply_identity(op, left, right)
            }
            leaf => leaf,
        }
    }
}

fn apply_identity(op: Operator, left: Expression, right: Expression) -> Expression {
    let rewritten = match op {
        Operator::Add if left.is_zero() => right,
        Operator::Add if right.is_zero() => left,
        Operator::Sub if right.is_zero() => left,
        Operator::Mul if left.is_zero() => left,
        Operator::Mul if right.is_zero() => right,
        Operator::Mul if left.is_one() => right,
        Operator::Mul if right.is_one() => left,
        Operator::Div if left.is_zero() => left,
        Operator::Div if right.is_one() => left,
        _ => return Expression::binary(op, left, right),
    };
    trace!("Applied '{}' identity, kept: {}", op, rewritten);
    rewritten
}
