use std::fmt;

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Symbol(char),
}

impl Token {
    pub fn is_symbol(&self, symbol: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}

/// Render a token list separated by single spaces
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
