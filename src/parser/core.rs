use log::{debug, trace, warn};

use crate::expression::{Expression, Operator};
use crate::parser::cursor::TokenCursor;
use crate::parser::errors::ParseError;
use crate::scanner::Token;

/// Default limit on nested parentheses and on tree depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

const ADDITIVE: [Operator; 2] = [Operator::Add, Operator::Sub];
const MULTIPLICATIVE: [Operator; 2] = [Operator::Mul, Operator::Div];

/// Recursive-descent parser with a bound on parenthesis nesting and on the
/// depth of the tree it builds. Later tree walks recurse in proportion to that
/// depth, so hostile input fails here instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse `tokens` as exactly one expression.
    ///
    /// Operator chains fold to the left, so `1 - 2 - 3` becomes
    /// `((1 - 2) - 3)`.
    ///
    /// # Errors
    ///
    /// Returns an error if no alternative of the grammar matches, if tokens
    /// are left over after a complete expression, or if parentheses or the
    /// resulting tree nest deeper than the configured limit.
    pub fn parse(&self, tokens: &[Token]) -> Result<Expression, ParseError> {
        debug!("Parsing {} tokens", tokens.len());

        let mut cursor = TokenCursor::new(tokens);
        let (expr, height) = self.expression(&mut cursor, 0)?;

        if let Some(token) = cursor.peek() {
            warn!(
                "Trailing token '{}' at position {} after complete expression",
                token,
                cursor.position()
            );
            return Err(ParseError::UnexpectedToken {
                position: cursor.position(),
                found: token.to_string(),
            });
        }

        debug!("Parsed expression of depth {}: {}", height, expr);
        Ok(expr)
    }

    // Each level returns its subtree together with the subtree's height
    // (binary nodes on the longest path). Flat chains are folded in a loop but
    // still produce deep trees, so every fold is counted against the limit
    // as well as every parenthesis.
    fn expression(
        &self,
        cursor: &mut TokenCursor,
        nesting: usize,
    ) -> Result<(Expression, usize), ParseError> {
        let (mut result, mut height) = self.term(cursor, nesting)?;
        while let Some(op) = cursor.accept_operator(&ADDITIVE) {
            let (right, right_height) = self.term(cursor, nesting)?;
            height = self.folded_height(height, right_height, cursor.position())?;
            result = Expression::binary(op, result, right);
        }
        Ok((result, height))
    }

    fn term(
        &self,
        cursor: &mut TokenCursor,
        nesting: usize,
    ) -> Result<(Expression, usize), ParseError> {
        let (mut result, mut height) = self.factor(cursor, nesting)?;
        while let Some(op) = cursor.accept_operator(&MULTIPLICATIVE) {
            let (right, right_height) = self.factor(cursor, nesting)?;
            height = self.folded_height(height, right_height, cursor.position())?;
            result = Expression::binary(op, result, right);
        }
        Ok((result, height))
    }

    fn folded_height(
        &self,
        left: usize,
        right: usize,
        position: usize,
    ) -> Result<usize, ParseError> {
        let height = left.max(right) + 1;
        if height > self.max_depth {
            warn!(
                "Tree depth limit of {} reached at position {}",
                self.max_depth, position
            );
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(height)
    }

    fn factor(
        &self,
        cursor: &mut TokenCursor,
        nesting: usize,
    ) -> Result<(Expression, usize), ParseError> {
        let position = cursor.position();
        trace!("Factor at position {}", position);

        match cursor.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some(Token::Number(value)) => {
                let n = integer_literal(*value).ok_or(ParseError::InvalidNumber {
                    position,
                    value: *value,
                })?;
                cursor.advance();
                Ok((Expression::Number(n), 0))
            }
            Some(Token::Identifier(name)) => {
                cursor.advance();
                Ok((Expression::identifier(name.as_str()), 0))
            }
            Some(Token::Symbol('(')) => {
                if nesting >= self.max_depth {
                    warn!("Nesting limit of {} reached at position {}", self.max_depth, position);
                    return Err(ParseError::NestingTooDeep {
                        limit: self.max_depth,
                    });
                }
                cursor.advance();
                let inner = self.expression(cursor, nesting + 1)?;
                if cursor.accept_symbol(')') {
                    return Ok(inner);
                }
                match cursor.peek() {
                    None => Err(ParseError::UnclosedParenthesis { position }),
                    Some(token) => Err(ParseError::UnexpectedToken {
                        position: cursor.position(),
                        found: token.to_string(),
                    }),
                }
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                position,
                found: token.to_string(),
            }),
        }
    }
}

// Tree leaves hold integers; the token source only yields digit runs, so
// anything else is an overflow.
fn integer_literal(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63

    if value.is_finite() && value.fract() == 0.0 && value.abs() < LIMIT {
        Some(value as i64)
    } else {
        None
    }
}
