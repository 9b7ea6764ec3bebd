/// Binary operators of the infix grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Arithmetic expression tree. Every node owns its children exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Number(i64),
    Identifier(String),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// Literal `0` leaf
    pub fn is_zero(&self) -> bool {
        matches!(self, Expression::Number(0))
    }

    /// Literal `1` leaf
    pub fn is_one(&self) -> bool {
        matches!(self, Expression::Number(1))
    }
}
