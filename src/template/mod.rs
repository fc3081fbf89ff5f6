//! Placeholder substitution engine.
//!
//! This module provides:
//! - Template compilation with `{{variable}}` placeholder validation
//! - Pure, repeatable rendering against a set of bindings
//!
//! Only bare-name interpolation is supported. Rendered text is opaque: it is
//! never escaped, parsed, or validated.
//!
//! # Example
//!
//! ```
//! use route_scaffold_generator::template::Template;
//!
//! let template = Template::compile("route for {{a}}").unwrap();
//! assert_eq!(template.render_one("a", "credit").unwrap(), "route for credit");
//! ```

mod compiled;
mod parser;
mod types;

pub use compiled::Template;
pub use types::{Bindings, MalformedReason, TemplateError, TemplateResult};
