//! Batch generation over an ordered list of identifiers.
//!
//! A [`Generator`] binds each identifier to a single template variable
//! (`a` by default), renders the template once per identifier in input order,
//! and accumulates the outputs sequentially into a [`GenerationResult`].
//!
//! Two batch policies are offered as separate operations:
//! - [`Generator::generate`] is fail-fast: the first render error aborts the
//!   batch and no partial result is returned.
//! - [`Generator::generate_skipping`] skips identifiers that fail to render
//!   and reports them next to the successful outputs.
//!
//! [`Generator::run`] dispatches on a configured [`BatchPolicy`].

mod types;

pub use types::{BatchPolicy, GenerationFailure, GenerationReport, GenerationResult};

use crate::template::{Template, TemplateResult};

/// Variable bound to each identifier unless configured otherwise
pub const DEFAULT_VARIABLE: &str = "a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    variable: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE)
    }
}

impl Generator {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Name of the template variable each identifier is bound to
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Render `template` once per identifier, aborting on the first failure.
    ///
    /// Duplicate identifiers keep their first position and the text of their
    /// last render.
    pub fn generate<S: AsRef<str>>(
        &self,
        template: &Template,
        identifiers: &[S],
    ) -> TemplateResult<GenerationResult> {
        let mut result = GenerationResult::new();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            let rendered = template.render_one(&self.variable, identifier)?;
            result.insert(identifier, rendered);
        }

        Ok(result)
    }

    /// Render `template` once per identifier, skipping identifiers that fail.
    pub fn generate_skipping<S: AsRef<str>>(
        &self,
        template: &Template,
        identifiers: &[S],
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            match template.render_one(&self.variable, identifier) {
                Ok(rendered) => report.outputs.insert(identifier, rendered),
                Err(error) => report.failures.push(GenerationFailure {
                    identifier: identifier.to_string(),
                    error,
                }),
            }
        }

        report
    }

    /// Run a batch under the given policy.
    ///
    /// Only [`BatchPolicy::FailFast`] can return `Err`.
    pub fn run<S: AsRef<str>>(
        &self,
        policy: BatchPolicy,
        template: &Template,
        identifiers: &[S],
    ) -> TemplateResult<GenerationReport> {
        match policy {
            BatchPolicy::FailFast => self.generate(template, identifiers).map(Into::into),
            BatchPolicy::SkipFailed => Ok(self.generate_skipping(template, identifiers)),
        }
    }
}
