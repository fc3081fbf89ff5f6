use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::generator::Generator;
use crate::metrics::GenerationMetrics;
use crate::template::{Template, TemplateResult};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// Configured template, compiled once at startup and shared read-only
    pub template: Arc<Template>,
    pub generator: Arc<Generator>,
    pub started_at: DateTime<Utc>,
    pub start_instant: Instant,
}

impl AppState {
    /// Build the state, compiling the configured template.
    ///
    /// A malformed configured template is a startup error.
    pub fn new(settings: Settings) -> TemplateResult<Self> {
        let template = Template::compile(settings.generator.template.as_str()).inspect_err(|e| {
            GenerationMetrics::record_compile_failure();
            tracing::error!(error = %e, "Configured template is malformed");
        })?;
        let generator = Generator::new(settings.generator.variable.as_str());

        GenerationMetrics::set_configured_variables(template.variables().len());
        tracing::info!(
            variables = ?template.variables(),
            identifiers = settings.generator.identifiers.len(),
            policy = settings.generator.policy.as_str(),
            "Configured template compiled"
        );

        Ok(Self {
            settings: Arc::new(settings),
            template: Arc::new(template),
            generator: Arc::new(generator),
            started_at: Utc::now(),
            start_instant: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_instant.elapsed().as_secs()
    }
}
