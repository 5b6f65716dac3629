//! Main module for shunt library functionality

pub mod formats;
pub mod lexing;
pub mod precedence;
pub mod processor;
pub mod token;
pub mod transform;

pub use transform::{transform, TransformError};
