//! Health check endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generator::BatchPolicy;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub generator: GeneratorHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct GeneratorHealthResponse {
    pub variable: String,
    pub policy: BatchPolicy,
    pub identifiers: usize,
    pub template_variables: Vec<String>,
}

/// GET /health - Liveness and configured generator summary
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let generator = &state.settings.generator;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        generator: GeneratorHealthResponse {
            variable: state.generator.variable().to_string(),
            policy: generator.policy,
            identifiers: generator.identifiers.len(),
            template_variables: state.template.variables().iter().cloned().collect(),
        },
    })
}
