use crate::expression::Operator;
use crate::scanner::Token;

/// Read position over a borrowed token slice
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consume the current token if it is `symbol`
    pub fn accept_symbol(&mut self, symbol: char) -> bool {
        match self.peek() {
            Some(token) if token.is_symbol(symbol) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consume the current token if it is one of `operators`
    pub fn accept_operator(&mut self, operators: &[Operator]) -> Option<Operator> {
        let op = match self.peek() {
            Some(Token::Symbol(c)) => Operator::from_symbol(*c)?,
            _ => return None,
        };
        if operators.contains(&op) {
            self.advance();
            Some(op)
        } else {
            None
        }
    }
}
