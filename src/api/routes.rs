use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::middleware::api_key_auth;
use crate::server::AppState;

use super::generate::{generate_custom, generate_default, inspect_template};
use super::health::health;
use super::metrics::prometheus_metrics;

pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Configured scaffold batch
        .route("/generate", get(generate_default))
        // Ad-hoc generation endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/generate", post(generate_custom))
                .route("/templates/inspect", post(inspect_template))
                .route_layer(middleware::from_fn_with_state(state.clone(), api_key_auth)),
        )
}
