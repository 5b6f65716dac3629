//! Format registry for token sequence serialization
//!
//! This module provides a pluggable registry of output formats. Each format implements
//! the `Formatter` trait and can be registered with `FormatRegistry`. The same formats
//! render both lexed token streams and postfix output, since both are token sequences.

use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for token sequence formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "simple", "json")
    fn name(&self) -> &str;

    /// Serialize a token sequence to this format
    fn serialize(&self, tokens: &[String]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters
///
/// Formats are registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize tokens using the specified format
    pub fn serialize(&self, tokens: &[String], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::with_separator(super::simple::DEFAULT_SEPARATOR)
    }

    /// Create a registry with the built-in formatters, `simple` joining on `separator`
    pub fn with_separator(separator: &str) -> Self {
        let mut registry = Self::new();

        registry.register(super::SimpleFormatter::new(separator));
        registry.register(super::JsonFormatter);
        registry.register(super::LinesFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
