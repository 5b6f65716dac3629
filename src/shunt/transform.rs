//! Infix to postfix transformation (shunting-yard)
//!
//!     Takes an already tokenized infix expression and reorders it into postfix order
//!     (Reverse Polish Notation). Two structures live for the duration of one call: an
//!     operator stack holding operators and open brackets, and an append-only output.
//!     Neither outlives the call and the precedence table is a constant, so concurrent
//!     calls never interact.
//!
//! Token Routing
//!
//!     Numbers go straight to the output. An opening bracket is pushed. A closing bracket
//!     drains the stack into the output down to the matching opening bracket, which is
//!     dropped. An operator first compares itself against the stack top: if the top is an
//!     operator of strictly higher rank, that one operator is popped to the output (the
//!     comparison is not repeated against the next top). The incoming operator is then
//!     pushed. Once the input is exhausted the stack is flushed into the output.
//!
//! Bracket Mismatch
//!
//!     A closing bracket that drains an empty stack, or an opening bracket still on the
//!     stack at flush time, aborts the call with [TransformError::BracketsMismatch]. No
//!     partial output is returned.
//!
//! Equal Precedence
//!
//!     Operators of the same tier never pop each other. `1 - 2 - 3` therefore becomes
//!     `1 2 3 - -`, i.e. right-grouped. Callers relying on left-to-right grouping of
//!     same-tier chains must bracket explicitly.

use crate::shunt::precedence::outranks;
use crate::shunt::token::{classify, Operator, TokenKind};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while transforming
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("brackets mismatch")]
    BracketsMismatch,
}

/// Entries on the operator stack. Closing brackets are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stacked {
    LeftBracket,
    Operator(Operator),
}

/// Per-call state: the operator stack and the postfix output built so far.
#[derive(Debug, Default)]
struct Yard {
    stack: Vec<Stacked>,
    output: Vec<String>,
}

impl Yard {
    fn accept(&mut self, token: String) -> Result<(), TransformError> {
        match classify(&token) {
            TokenKind::LeftBracket => {
                trace!("push (");
                self.stack.push(Stacked::LeftBracket);
            }
            TokenKind::RightBracket => self.close_bracket()?,
            TokenKind::Operator(op) => self.handle_operator(op),
            TokenKind::Number => {
                trace!(token = %token, "emit number");
                self.output.push(token);
            }
        }
        Ok(())
    }

    fn close_bracket(&mut self) -> Result<(), TransformError> {
        loop {
            match self.stack.pop() {
                Some(Stacked::LeftBracket) => return Ok(()),
                Some(Stacked::Operator(op)) => self.emit(op),
                None => {
                    debug!("closing bracket has no matching opening bracket");
                    return Err(TransformError::BracketsMismatch);
                }
            }
        }
    }

    fn handle_operator(&mut self, incoming: Operator) {
        if let Some(&Stacked::Operator(top)) = self.stack.last() {
            if outranks(top, incoming) {
                self.stack.pop();
                self.emit(top);
            }
        }
        trace!(operator = %incoming, "push operator");
        self.stack.push(Stacked::Operator(incoming));
    }

    fn emit(&mut self, op: Operator) {
        trace!(operator = %op, "emit operator");
        self.output.push(op.symbol().to_string());
    }

    fn finish(mut self) -> Result<Vec<String>, TransformError> {
        while let Some(entry) = self.stack.pop() {
            match entry {
                Stacked::Operator(op) => self.emit(op),
                Stacked::LeftBracket => {
                    debug!("opening bracket left unclosed");
                    return Err(TransformError::BracketsMismatch);
                }
            }
        }
        Ok(self.output)
    }
}

/// Transform an infix token sequence into postfix order.
///
/// Tokens other than `+ - * / ( )` are treated as numbers and passed through unchanged.
/// Empty input yields empty output.
pub fn transform<I>(tokens: I) -> Result<Vec<String>, TransformError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut yard = Yard::default();
    for token in tokens {
        yard.accept(token.into())?;
    }
    let output = yard.finish()?;
    debug!(tokens = output.len(), "transformed to postfix");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(tokens: &[&str]) -> Result<Vec<String>, TransformError> {
        transform(tokens.iter().copied())
    }

    #[test]
    fn test_higher_rank_emitted_first() {
        assert_eq!(
            postfix(&["3", "+", "4", "*", "2"]).unwrap(),
            vec!["3", "4", "2", "*", "+"]
        );
    }

    #[test]
    fn test_brackets_override_precedence() {
        assert_eq!(
            postfix(&["(", "1", "+", "2", ")", "*", "3"]).unwrap(),
            vec!["1", "2", "+", "3", "*"]
        );
    }

    #[test]
    fn test_unmatched_closing_bracket() {
        assert_eq!(
            postfix(&["1", "+", ")"]),
            Err(TransformError::BracketsMismatch)
        );
        assert_eq!(postfix(&[")"]), Err(TransformError::BracketsMismatch));
    }

    #[test]
    fn test_unmatched_opening_bracket() {
        assert_eq!(
            postfix(&["(", "1", "+", "2"]),
            Err(TransformError::BracketsMismatch)
        );
        assert_eq!(postfix(&["("]), Err(TransformError::BracketsMismatch));
    }

    #[test]
    fn test_equal_rank_stays_stacked() {
        assert_eq!(
            postfix(&["1", "-", "2", "-", "3"]).unwrap(),
            vec!["1", "2", "3", "-", "-"]
        );
        assert_eq!(
            postfix(&["8", "/", "4", "/", "2"]).unwrap(),
            vec!["8", "4", "2", "/", "/"]
        );
    }

    #[test]
    fn test_single_pop_per_operator() {
        // at `+` only the top `*` is emitted; the one beneath waits for the flush
        assert_eq!(
            postfix(&["1", "*", "2", "*", "3", "+", "4"]).unwrap(),
            vec!["1", "2", "3", "*", "4", "+", "*"]
        );
    }

    #[test]
    fn test_operator_does_not_pop_past_bracket() {
        assert_eq!(
            postfix(&["2", "*", "(", "3", "+", "4", ")"]).unwrap(),
            vec!["2", "3", "4", "+", "*"]
        );
    }

    #[test]
    fn test_nested_brackets() {
        assert_eq!(
            postfix(&["(", "(", "1", "+", "2", ")", "*", "3", ")", "-", "4"]).unwrap(),
            vec!["1", "2", "+", "3", "*", "4", "-"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(postfix(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_numbers_only_are_echoed() {
        assert_eq!(postfix(&["1", "2", "3"]).unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unknown_tokens_are_numbers() {
        assert_eq!(
            postfix(&["x", "*", "y1", "+", "3.5"]).unwrap(),
            vec!["x", "y1", "*", "3.5", "+"]
        );
    }

    #[test]
    fn test_empty_brackets_are_dropped() {
        assert_eq!(postfix(&["(", ")"]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_accepts_owned_strings() {
        let tokens = vec!["6".to_string(), "/".to_string(), "3".to_string()];
        assert_eq!(transform(tokens).unwrap(), vec!["6", "3", "/"]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TransformError::BracketsMismatch.to_string(), "brackets mismatch");
    }
}
