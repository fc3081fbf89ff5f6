//! Template types and error definitions

use std::collections::HashMap;
use std::ops::Range;

use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The source has an unterminated or invalid placeholder marker.
    #[error("Malformed template at byte {offset}: {reason}")]
    Malformed {
        /// Byte offset of the offending `{{` in the source
        offset: usize,
        reason: MalformedReason,
    },

    /// A referenced variable had no binding at render time.
    #[error("Unbound variable: {0}")]
    UnboundVariable(String),
}

impl TemplateError {
    /// Stable machine-readable code for API responses and metric labels
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::Malformed { .. } => "MALFORMED_TEMPLATE",
            TemplateError::UnboundVariable(_) => "UNBOUND_VARIABLE",
        }
    }
}

/// Why a placeholder marker was rejected at compile time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("placeholder opened but never closed")]
    Unterminated,

    #[error("placeholder has no variable name")]
    EmptyName,

    #[error("'{0}' is not a bare variable name")]
    InvalidName(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Variable name to substituted value
pub type Bindings = HashMap<String, String>;

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Byte range of literal text in the source
    Literal(Range<usize>),
    /// Variable name to substitute
    Placeholder(String),
}
