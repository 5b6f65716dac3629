//! Lines format: one token per line

use super::registry::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinesFormatter;

impl Formatter for LinesFormatter {
    fn name(&self) -> &str {
        "lines"
    }

    fn serialize(&self, tokens: &[String]) -> Result<String, FormatError> {
        Ok(tokens.join("\n"))
    }

    fn description(&self) -> &str {
        "One token per line"
    }
}
