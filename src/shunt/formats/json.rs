//! JSON format: a flat array of token strings

use super::registry::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tokens: &[String]) -> Result<String, FormatError> {
        serde_json::to_string(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON array of token strings"
    }
}
