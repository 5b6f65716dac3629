//! Processing API for arithmetic expressions
//!
//! Chains the steps a front end needs: split input text into tokens, optionally reorder
//! them into postfix, and render the result in one of the registered formats. What to
//! produce is described by a [ProcessingSpec], parsed from strings such as
//! `postfix-simple` or `token-json`.
//!
//! ```rust,ignore
//! use shunt::shunt::formats::FormatRegistry;
//! use shunt::shunt::processor::{process, InputMode, ProcessingSpec};
//!
//! let registry = FormatRegistry::with_defaults();
//! let spec = ProcessingSpec::from_string("postfix-simple")?;
//! let output = process("3 + 4 * 2", InputMode::Expression, &spec, &registry)?;
//! assert_eq!(output, "3 4 2 * +");
//! ```

use crate::shunt::formats::{FormatError, FormatRegistry};
use crate::shunt::lexing::{lex, split_tokens, LexError};
use crate::shunt::transform::{transform, TransformError};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Represents the processing stage (what data to produce)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// The token sequence as split from the input
    Token,
    /// The token sequence reordered into postfix
    Postfix,
}

impl ProcessingStage {
    pub fn name(self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Postfix => "postfix",
        }
    }
}

/// How input text is split into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Run the expression lexer
    #[default]
    Expression,
    /// Input is already tokenized, whitespace separated
    Tokens,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    /// Name of a format in the [FormatRegistry]
    pub format: String,
}

impl ProcessingSpec {
    /// Parse a spec string like "postfix-json" or "token-simple"
    ///
    /// The format name is not checked here; an unknown format surfaces when processing.
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "postfix" => ProcessingStage::Postfix,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        if format.is_empty() {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        Ok(ProcessingSpec {
            stage,
            format: format.to_string(),
        })
    }

    /// Get all specs the registry can serve, sorted by stage then format
    pub fn available_specs(registry: &FormatRegistry) -> Vec<ProcessingSpec> {
        [ProcessingStage::Token, ProcessingStage::Postfix]
            .into_iter()
            .flat_map(|stage| {
                registry
                    .list_formats()
                    .into_iter()
                    .map(move |format| ProcessingSpec { stage, format })
            })
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format)
    }
}

/// Errors that can occur during processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Lexing error: {0}")]
    Lex(#[from] LexError),
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Split input text into tokens according to the input mode
pub fn tokens_for(source: &str, mode: InputMode) -> Result<Vec<String>, LexError> {
    match mode {
        InputMode::Expression => lex(source),
        InputMode::Tokens => Ok(split_tokens(source)),
    }
}

/// Process an expression according to the given specification
pub fn process(
    source: &str,
    mode: InputMode,
    spec: &ProcessingSpec,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let tokens = tokens_for(source, mode)?;
    debug!(count = tokens.len(), ?mode, %spec, "tokens ready");

    let tokens = match spec.stage {
        ProcessingStage::Token => tokens,
        ProcessingStage::Postfix => transform(tokens)?,
    };

    Ok(registry.serialize(&tokens, &spec.format)?)
}

/// Process the contents of a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    mode: InputMode,
    spec: &ProcessingSpec,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::IoError(format!("{}: {}", file_path.display(), e)))?;

    process(&content, mode, spec, registry)
}
