//! Output format implementations for token sequences
//!
//! Lexed tokens and postfix output are both plain token sequences, so a single set of
//! formatters serves both processing stages.

pub mod json;
pub mod lines;
pub mod registry;
pub mod simple;

pub use json::JsonFormatter;
pub use lines::LinesFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use simple::SimpleFormatter;
