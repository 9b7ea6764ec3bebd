//! Property-based tests for the parser, printer and simplifier.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::expression::{Expression, Operator};
    use crate::parser::parse_str;

    fn operator() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Sub),
            Just(Operator::Mul),
            Just(Operator::Div),
        ]
    }

    // Small numbers so that 0 and 1 show up often enough to trigger rewrites
    fn number() -> impl Strategy<Value = Expression> {
        prop_oneof![0i64..4, 0i64..1000].prop_map(Expression::Number)
    }

    fn leaf() -> impl Strategy<Value = Expression> {
        prop_oneof![
            number(),
            prop_oneof![Just("x"), Just("y"), Just("rate2")]
                .prop_map(|name| Expression::identifier(name)),
        ]
    }

    fn tree(leaf: BoxedStrategy<Expression>) -> impl Strategy<Value = Expression> {
        leaf.prop_recursive(6, 64, 2, |inner| {
            (operator(), inner.clone(), inner)
                .prop_map(|(op, l, r)| Expression::binary(op, l, r))
        })
    }

    fn expression() -> impl Strategy<Value = Expression> {
        tree(leaf().boxed())
    }

    fn numerical_expression() -> impl Strategy<Value = Expression> {
        tree(number().boxed())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(1.0)
    }

    proptest! {
        #[test]
        fn printed_tree_parses_back(expr in expression()) {
            let text = expr.to_string();
            prop_assert_eq!(parse_str(&text), Ok(expr));
        }

        #[test]
        fn simplify_is_idempotent(expr in expression()) {
            let once = expr.simplify();
            prop_assert_eq!(once.clone().simplify(), once);
        }

        #[test]
        fn simplify_never_grows_the_tree(expr in expression()) {
            let before = expr.to_string().len();
            prop_assert!(expr.simplify().to_string().len() <= before);
        }

        #[test]
        fn simplify_preserves_defined_values(expr in numerical_expression()) {
            if let Ok(expected) = expr.evaluate()
                && expected.is_finite()
            {
                let simplified = expr.simplify();
                match simplified.evaluate() {
                    Ok(value) => prop_assert!(close(value, expected), "{} != {}", value, expected),
                    Err(e) => prop_assert!(false, "simplified tree failed: {}", e),
                }
            }
        }

        #[test]
        fn derivative_of_constant_is_zero(expr in numerical_expression()) {
            prop_assert_eq!(expr.differentiate("x").simplify(), Expression::Number(0));
        }
    }
}
