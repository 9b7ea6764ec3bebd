use log::{debug, info, warn};

use crate::expression::DEFAULT_VARIABLE;
use crate::parser::{DEFAULT_MAX_DEPTH, Parser};
use crate::scanner::{is_identifier, tokenize};
use crate::session::errors::SessionError;
use crate::session::report::{Report, Value};

/// Settings shared by every round of a dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub variable: String,
    pub max_depth: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Runs the parse, evaluate, simplify and differentiate pipeline on single
/// input lines. Rounds share no state; a failed line leaves nothing behind.
#[derive(Debug, Clone)]
pub struct Session {
    parser: Parser,
    variable: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the variable is not a valid identifier.
    pub fn with_options(options: SessionOptions) -> Result<Self, SessionError> {
        if !is_identifier(&options.variable) {
            warn!("Rejecting differentiation variable '{}'", options.variable);
            return Err(SessionError::InvalidVariable(options.variable));
        }

        Ok(Self {
            parser: Parser::with_max_depth(options.max_depth),
            variable: options.variable,
        })
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Lines starting with `!` end the dialogue
    pub fn is_terminator(line: &str) -> bool {
        line.starts_with('!')
    }

    /// # Errors
    ///
    /// Returns an error if the line is not a complete expression, or if a
    /// numerical expression divides by zero.
    pub fn process(&self, line: &str) -> Result<Report, SessionError> {
        info!("Processing input line: '{}'", line);

        let tokens = tokenize(line);
        let expression = self.parser.parse(&tokens)?;

        let value = if expression.is_numerical() {
            Value::Number(expression.evaluate()?)
        } else {
            debug!("Skipping evaluation of non-numerical expression");
            Value::NotNumerical
        };

        let simplified = expression.clone().simplify();
        let derivative = simplified.differentiate(&self.variable).simplify();

        Ok(Report {
            tokens,
            expression,
            value,
            simplified,
            variable: self.variable.clone(),
            derivative,
        })
    }
}
