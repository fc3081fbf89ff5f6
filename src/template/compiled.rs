//! Compiled template and the substitution engine

use std::collections::BTreeSet;

use super::parser;
use super::types::{Bindings, Segment, TemplateError, TemplateResult};

/// An immutable, compiled template.
///
/// Compiling validates every placeholder marker once; rendering is a pure
/// function of the compiled form and the supplied bindings, so a single
/// `Template` can be shared across threads and rendered concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    variables: BTreeSet<String>,
}

impl Template {
    /// Compile a template source string.
    ///
    /// Fails with [`TemplateError::Malformed`] if a marker is opened but never
    /// closed or does not enclose a bare variable name.
    pub fn compile(source: impl Into<String>) -> TemplateResult<Self> {
        let source = source.into();
        let segments = parser::parse(&source)?;

        let variables = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.clone()),
                Segment::Literal(_) => None,
            })
            .collect();

        Ok(Self {
            source,
            segments,
            variables,
        })
    }

    /// Raw template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of every variable the template references
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn references(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// Render with a full set of bindings. Extra bindings are ignored.
    pub fn render(&self, bindings: &Bindings) -> TemplateResult<String> {
        self.render_with(|name| bindings.get(name).map(String::as_str))
    }

    /// Render with a single `name = value` binding.
    pub fn render_one(&self, name: &str, value: &str) -> TemplateResult<String> {
        self.render_with(|candidate| (candidate == name).then_some(value))
    }

    fn render_with<'v, F>(&self, lookup: F) -> TemplateResult<String>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut output = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(range) => output.push_str(&self.source[range.clone()]),
                Segment::Placeholder(name) => {
                    let value =
                        lookup(name).ok_or_else(|| TemplateError::UnboundVariable(name.clone()))?;
                    output.push_str(value);
                }
            }
        }

        Ok(output)
    }
}
