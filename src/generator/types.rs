//! Generation result types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::template::TemplateError;

/// How a batch reacts to a failed render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// The first failure aborts the whole batch
    #[default]
    FailFast,
    /// Failed identifiers are skipped and reported alongside the outputs
    SkipFailed,
}

impl BatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchPolicy::FailFast => "fail_fast",
            BatchPolicy::SkipFailed => "skip_failed",
        }
    }
}

/// Ordered mapping of identifier to rendered text.
///
/// Keys keep the position of their first insertion; re-inserting an
/// identifier replaces its text in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationResult {
    entries: IndexMap<String, String>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, identifier: &str, rendered: String) {
        self.entries.insert(identifier.to_string(), rendered);
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in output order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

/// An identifier that failed to render under [`BatchPolicy::SkipFailed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub identifier: String,
    pub error: TemplateError,
}

/// Outcome of a batch: rendered outputs plus any skipped identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub outputs: GenerationResult,
    /// Failed identifiers in input order (always empty for fail-fast batches)
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<GenerationResult> for GenerationReport {
    fn from(outputs: GenerationResult) -> Self {
        Self {
            outputs,
            failures: Vec::new(),
        }
    }
}
