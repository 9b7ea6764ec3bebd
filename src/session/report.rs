use std::fmt;

use crate::expression::Expression;
use crate::scanner::{Token, format_tokens};

/// Numeric outcome of a dialogue round
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    NotNumerical,
}

/// Everything one dialogue round computes for a line of input
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tokens: Vec<Token>,
    pub expression: Expression,
    pub value: Value,
    pub simplified: Expression,
    pub variable: String,
    /// Derivative of `simplified`, itself simplified
    pub derivative: Expression,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "tokens: {}", format_tokens(&self.tokens))?;
        writeln!(f, "in infix notation: {}", self.expression)?;
        match self.value {
            Value::Number(v) => writeln!(f, "the value is {}", format_general(v))?,
            Value::NotNumerical => writeln!(f, "this is not a numerical expression")?,
        }
        writeln!(f, "simplified: {}", self.simplified)?;
        write!(f, "derivative to {}: {}", self.variable, self.derivative)
    }
}

/// Render like C's `%g`: six significant digits, trailing zeros dropped, and
/// scientific notation when the exponent is below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // The exponent has to come from the rounded value: 999999.5 becomes 1e+06
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
