//! Lexing for arithmetic expressions
//!
//! Turns raw expression text into the token strings the transformer works on. This is a
//! collaborator of the transformer, not part of it: callers that already hold tokens skip
//! lexing entirely.

pub mod base_tokenization;
pub mod tokens;

pub use base_tokenization::{lex, split_tokens, tokenize, LexError};
pub use tokens::Token;
