//! API layer - HTTP endpoint handlers.

mod generate;
mod health;
mod metrics;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use generate::{
    generate_custom, generate_default, inspect_template, FailureInfo, GenerateRequest,
    GenerateResponse, InspectRequest, InspectResponse,
};
pub use health::{health, GeneratorHealthResponse, HealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
