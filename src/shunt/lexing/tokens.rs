//! Token definitions for arithmetic expressions
//!
//! The tokens are defined using the logos derive macro. Whitespace between tokens is
//! skipped; anything logos cannot match surfaces as a lexing error.
use logos::Logos;
use std::fmt;

/// All tokens an arithmetic expression can contain
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Integer or decimal literal; the text is kept verbatim
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),
}

impl Token {
    /// The string form handed to the transformer.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Number(text) => text,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    pub fn into_string(self) -> String {
        match self {
            Token::Number(text) => text,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
