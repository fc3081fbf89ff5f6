//! Prometheus metrics for the scaffold generator.
//!
//! This module provides:
//! - Generation metrics (batches by policy and outcome, renders, batch latency)
//! - Template compilation failures
//! - HTTP request metrics

mod helpers;

pub use helpers::{encode_metrics, GenerationMetrics, HttpMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter, register_int_counter_vec,
    register_int_gauge, Histogram, HistogramVec, IntCounter, IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "scaffold";

lazy_static! {
    // ============================================================================
    // Generation Metrics
    // ============================================================================

    /// Generation batches by policy and outcome
    pub static ref GENERATION_BATCHES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_generation_batches_total", METRIC_PREFIX),
        "Total generation batches",
        &["policy", "outcome"]
    ).unwrap();

    /// Individual renders by outcome, from completed and partial batches only.
    /// Aborted fail-fast batches appear in `GENERATION_BATCHES_TOTAL` instead.
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total template renders",
        &["outcome"]
    ).unwrap();

    /// Time spent rendering a whole batch
    pub static ref GENERATION_BATCH_LATENCY: Histogram = register_histogram!(
        format!("{}_generation_batch_latency_seconds", METRIC_PREFIX),
        "Generation batch latency in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
    ).unwrap();

    /// Identifiers per batch
    pub static ref GENERATION_BATCH_SIZE: Histogram = register_histogram!(
        format!("{}_generation_batch_size", METRIC_PREFIX),
        "Number of identifiers per generation batch",
        vec![1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0]
    ).unwrap();

    /// Templates rejected at compile time
    pub static ref TEMPLATE_COMPILE_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_template_compile_failures_total", METRIC_PREFIX),
        "Total templates rejected as malformed"
    ).unwrap();

    /// Variables referenced by the configured template
    pub static ref CONFIGURED_TEMPLATE_VARIABLES: IntGauge = register_int_gauge!(
        format!("{}_configured_template_variables", METRIC_PREFIX),
        "Number of variables referenced by the configured template"
    ).unwrap();

    // ============================================================================
    // HTTP Metrics
    // ============================================================================

    /// HTTP request counter by method and path
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_http_requests_total", METRIC_PREFIX),
        "Total HTTP requests",
        &["method", "path", "status"]
    ).unwrap();

    /// HTTP request latency
    pub static ref HTTP_REQUEST_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_http_request_latency_seconds", METRIC_PREFIX),
        "HTTP request latency in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    ).unwrap();
}
