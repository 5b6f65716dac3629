//! # shunt
//!
//! Infix to postfix (Reverse Polish Notation) conversion using the shunting-yard
//! algorithm.
//!
//! The core is `shunt::transform`, which reorders an already tokenized infix expression.
//! Around it sit an expression lexer, output formats and a processing API used by the
//! `shunt` binary.
//!
//! ## Testing
//!
//! Scenario tables, property tests and CLI tests live under `tests/`.

pub mod shunt;
