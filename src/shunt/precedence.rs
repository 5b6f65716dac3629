//! Operator precedence table
//!
//! Two tiers: `+ -` bind at rank 0, `* /` at rank 1. Higher binds tighter.

use crate::shunt::token::Operator;

/// Rank per operator, indexed by the `Operator` discriminant.
const PRECEDENCE: [u8; 4] = [
    0, // Plus
    0, // Minus
    1, // Multiply
    1, // Divide
];

impl Operator {
    pub fn precedence(self) -> u8 {
        PRECEDENCE[self as usize]
    }
}

/// Whether an operator sitting on the stack must be emitted before `incoming` is pushed.
///
/// Only a strictly higher rank wins. Equal ranks stay stacked, so chains of same-tier
/// operators come out right-grouped (`1 - 2 - 3` becomes `1 2 3 - -`).
pub fn outranks(stack_top: Operator, incoming: Operator) -> bool {
    stack_top.precedence() > incoming.precedence()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks() {
        assert_eq!(Operator::Plus.precedence(), 0);
        assert_eq!(Operator::Minus.precedence(), 0);
        assert_eq!(Operator::Multiply.precedence(), 1);
        assert_eq!(Operator::Divide.precedence(), 1);
    }

    #[test]
    fn test_outranks_is_strict() {
        assert!(outranks(Operator::Multiply, Operator::Plus));
        assert!(outranks(Operator::Divide, Operator::Minus));

        assert!(!outranks(Operator::Plus, Operator::Multiply));
        assert!(!outranks(Operator::Minus, Operator::Minus));
        assert!(!outranks(Operator::Multiply, Operator::Divide));
        assert!(!outranks(Operator::Divide, Operator::Divide));
    }
}
