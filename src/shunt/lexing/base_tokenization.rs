//! Base tokenization for arithmetic expressions
//!
//! This is where source strings become token streams. The transformer never calls into
//! this module: it consumes token strings, however they were produced. The CLI and the
//! processor use [lex] to feed it from raw text, or [split_tokens] when the input is
//! already tokenized.

use crate::shunt::lexing::tokens::Token;
use logos::Logos;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
}

/// Tokenize source with location information
///
/// Fails on the first character logos cannot match.
pub fn tokenize(source: &str) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                debug!(offset = span.start, %character, "lexing failed");
                return Err(LexError::UnexpectedCharacter {
                    character,
                    offset: span.start,
                });
            }
        }
    }

    Ok(tokens)
}

/// Tokenize source into the string tokens the transformer consumes
pub fn lex(source: &str) -> Result<Vec<String>, LexError> {
    Ok(tokenize(source)?
        .into_iter()
        .map(|(token, _)| token.into_string())
        .collect())
}

/// Split pre-tokenized input on whitespace. No validation is done.
pub fn split_tokens(source: &str) -> Vec<String> {
    source.split_whitespace().map(str::to_owned).collect()
}
