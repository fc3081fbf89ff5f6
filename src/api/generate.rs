//! Generation endpoints.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::generator::{BatchPolicy, GenerationReport, GenerationResult, Generator};
use crate::metrics::GenerationMetrics;
use crate::server::AppState;
use crate::template::{Template, TemplateError};

/// Request body for an ad-hoc generation batch
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Template source with `{{variable}}` placeholders
    pub template: String,

    /// Identifiers to render, in output order
    pub identifiers: Vec<String>,

    /// Batch policy (optional, defaults to the configured policy)
    #[serde(default)]
    pub policy: Option<BatchPolicy>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Rendered text keyed by identifier, in input order
    pub outputs: GenerationResult,

    /// Identifiers skipped under `skip_failed`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureInfo>,
}

#[derive(Debug, Serialize)]
pub struct FailureInfo {
    pub identifier: String,
    pub code: String,
    pub message: String,
}

impl From<GenerationReport> for GenerateResponse {
    fn from(report: GenerationReport) -> Self {
        let failures = report
            .failures
            .into_iter()
            .map(|failure| FailureInfo {
                code: failure.error.code().to_string(),
                message: failure.error.to_string(),
                identifier: failure.identifier,
            })
            .collect();

        Self {
            outputs: report.outputs,
            failures,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    /// Variables referenced by the template, sorted
    pub variables: Vec<String>,
}

/// GET /generate - Render the configured template for every configured identifier
#[tracing::instrument(name = "http.generate_default", skip(state))]
pub async fn generate_default(State(state): State<AppState>) -> Result<Json<GenerationResult>> {
    let config = &state.settings.generator;

    let report = execute_batch(
        &state.generator,
        config.policy,
        &state.template,
        &config.identifiers,
    )?;

    Ok(Json(report.outputs))
}

/// POST /api/v1/generate - Render an ad-hoc template for the given identifiers
#[tracing::instrument(
    name = "http.generate_custom",
    skip(state, request),
    fields(identifiers = request.identifiers.len())
)]
pub async fn generate_custom(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    if request.identifiers.is_empty() {
        return Err(AppError::Validation(
            "identifiers must not be empty".to_string(),
        ));
    }

    let template = compile(request.template)?;
    let policy = request.policy.unwrap_or(state.settings.generator.policy);

    let report = execute_batch(&state.generator, policy, &template, &request.identifiers)?;

    Ok(Json(report.into()))
}

/// POST /api/v1/templates/inspect - Compile a template and list its variables
#[tracing::instrument(name = "http.inspect_template", skip(request))]
pub async fn inspect_template(Json(request): Json<InspectRequest>) -> Result<Json<InspectResponse>> {
    let template = compile(request.template)?;

    Ok(Json(InspectResponse {
        variables: template.variables().iter().cloned().collect(),
    }))
}

fn compile(source: String) -> std::result::Result<Template, TemplateError> {
    Template::compile(source).inspect_err(|_| GenerationMetrics::record_compile_failure())
}

/// Run one batch, logging and recording metrics around the pure generator.
fn execute_batch(
    generator: &Generator,
    policy: BatchPolicy,
    template: &Template,
    identifiers: &[String],
) -> std::result::Result<GenerationReport, TemplateError> {
    let span = tracing::info_span!(
        "generation.batch",
        policy = policy.as_str(),
        identifiers = identifiers.len()
    );
    let _enter = span.enter();

    GenerationMetrics::record_batch_size(identifiers.len());
    let start = Instant::now();

    match generator.run(policy, template, identifiers) {
        Ok(report) if report.is_complete() => {
            GenerationMetrics::record_completed(policy, report.outputs.len(), start.elapsed());
            tracing::debug!(rendered = report.outputs.len(), "Generation batch completed");
            Ok(report)
        }
        Ok(report) => {
            for failure in &report.failures {
                tracing::warn!(
                    identifier = %failure.identifier,
                    error = %failure.error,
                    "Skipped identifier that failed to render"
                );
            }
            GenerationMetrics::record_partial(
                policy,
                report.outputs.len(),
                report.failures.len(),
                start.elapsed(),
            );
            Ok(report)
        }
        Err(e) => {
            GenerationMetrics::record_aborted(policy, start.elapsed());
            tracing::warn!(error = %e, "Generation batch aborted");
            Err(e)
        }
    }
}
