//! Token classification helpers.
//!
//!     The transformer works over opaque token strings. Before a token can be routed it is
//!     classified into one of four kinds: left bracket, right bracket, operator, or number.
//!     Only the four operator symbols and the two round brackets are recognized; any other
//!     string is a number and is passed through untouched (no numeric parsing happens here).

use std::fmt;

/// Binary arithmetic operators understood by the transformer.
///
/// The discriminants index the precedence table in [precedence](super::precedence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus = 0,
    Minus = 1,
    Multiply = 2,
    Divide = 3,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol this operator is written with.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub const LEFT_BRACKET: &str = "(";
pub const RIGHT_BRACKET: &str = ")";

/// What a raw token means to the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBracket,
    RightBracket,
    Operator(Operator),
    /// Anything else, kept opaque.
    Number,
}

/// Classify a raw token string.
pub fn classify(token: &str) -> TokenKind {
    match token {
        LEFT_BRACKET => TokenKind::LeftBracket,
        RIGHT_BRACKET => TokenKind::RightBracket,
        other => match Operator::from_symbol(other) {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::Number,
        },
    }
}

pub fn is_operator(token: &str) -> bool {
    Operator::from_symbol(token).is_some()
}

pub fn is_round_bracket(token: &str) -> bool {
    token == LEFT_BRACKET || token == RIGHT_BRACKET
}

pub fn is_left_bracket(token: &str) -> bool {
    token == LEFT_BRACKET
}
