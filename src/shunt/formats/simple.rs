//! Simple format: tokens joined on a single line

use super::registry::{FormatError, Formatter};

pub const DEFAULT_SEPARATOR: &str = " ";

/// Joins tokens with a configurable separator, e.g. `3 4 2 * +`
#[derive(Debug, Clone)]
pub struct SimpleFormatter {
    separator: String,
}

impl SimpleFormatter {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for SimpleFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn serialize(&self, tokens: &[String]) -> Result<String, FormatError> {
        Ok(tokens.join(self.separator.as_str()))
    }

    fn description(&self) -> &str {
        "Tokens on one line, separated by the configured separator"
    }
}
