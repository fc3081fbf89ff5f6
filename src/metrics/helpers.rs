//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    CONFIGURED_TEMPLATE_VARIABLES, GENERATION_BATCHES_TOTAL, GENERATION_BATCH_LATENCY,
    GENERATION_BATCH_SIZE, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_LATENCY, RENDERS_TOTAL,
    TEMPLATE_COMPILE_FAILURES_TOTAL,
};
use crate::generator::BatchPolicy;

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// How a generation batch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchOutcome {
    Completed { rendered: usize },
    Partial { rendered: usize, failed: usize },
    /// Fail-fast abort; the error does not say how many renders preceded it
    Aborted,
}

impl BatchOutcome {
    fn label(self) -> &'static str {
        match self {
            BatchOutcome::Completed { .. } => "completed",
            BatchOutcome::Partial { .. } => "partial",
            BatchOutcome::Aborted => "aborted",
        }
    }

    /// (ok, failed) increments for `RENDERS_TOTAL`
    fn render_counts(self) -> (u64, u64) {
        match self {
            BatchOutcome::Completed { rendered } => (rendered as u64, 0),
            BatchOutcome::Partial { rendered, failed } => (rendered as u64, failed as u64),
            BatchOutcome::Aborted => (0, 0),
        }
    }
}

/// Helper struct for recording generation metrics
pub struct GenerationMetrics;

impl GenerationMetrics {
    /// Record a batch that produced every output
    pub fn record_completed(policy: BatchPolicy, rendered: usize, elapsed: Duration) {
        Self::record_outcome(policy, BatchOutcome::Completed { rendered }, elapsed);
    }

    /// Record a skip-failed batch with at least one skipped identifier
    pub fn record_partial(policy: BatchPolicy, rendered: usize, failed: usize, elapsed: Duration) {
        Self::record_outcome(policy, BatchOutcome::Partial { rendered, failed }, elapsed);
    }

    /// Record a fail-fast batch aborted by a render error.
    ///
    /// Only the batch is counted; `RENDERS_TOTAL` is left untouched.
    pub fn record_aborted(policy: BatchPolicy, elapsed: Duration) {
        Self::record_outcome(policy, BatchOutcome::Aborted, elapsed);
    }

    /// Record the size of an incoming batch
    pub fn record_batch_size(identifiers: usize) {
        GENERATION_BATCH_SIZE.observe(identifiers as f64);
    }

    /// Record a template rejected at compile time
    pub fn record_compile_failure() {
        TEMPLATE_COMPILE_FAILURES_TOTAL.inc();
    }

    /// Set the variable count of the configured template
    pub fn set_configured_variables(count: usize) {
        CONFIGURED_TEMPLATE_VARIABLES.set(count as i64);
    }

    fn record_outcome(policy: BatchPolicy, outcome: BatchOutcome, elapsed: Duration) {
        GENERATION_BATCHES_TOTAL
            .with_label_values(&[policy.as_str(), outcome.label()])
            .inc();
        GENERATION_BATCH_LATENCY.observe(elapsed.as_secs_f64());

        let (ok, failed) = outcome.render_counts();
        if ok > 0 {
            RENDERS_TOTAL.with_label_values(&["ok"]).inc_by(ok);
        }
        if failed > 0 {
            RENDERS_TOTAL.with_label_values(&["failed"]).inc_by(failed);
        }
    }
}

/// Helper struct for recording HTTP metrics
pub struct HttpMetrics;

impl HttpMetrics {
    /// Record a completed HTTP request
    pub fn record_request(method: &str, path: &str, status: u16, elapsed: Duration) {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&[method, path, status.to_string().as_str()])
            .inc();
        HTTP_REQUEST_LATENCY
            .with_label_values(&[method, path])
            .observe(elapsed.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_metrics_are_encoded() {
        GenerationMetrics::record_completed(BatchPolicy::FailFast, 5, Duration::from_micros(20));
        GenerationMetrics::record_partial(
            BatchPolicy::SkipFailed,
            1,
            2,
            Duration::from_micros(20),
        );
        GenerationMetrics::record_aborted(BatchPolicy::FailFast, Duration::from_micros(5));
        GenerationMetrics::record_compile_failure();

        let output = encode_metrics().unwrap();
        assert!(output.contains("scaffold_generation_batches_total"));
        assert!(output.contains("outcome=\"partial\""));
        assert!(output.contains("scaffold_renders_total"));
        assert!(output.contains("scaffold_template_compile_failures_total"));
    }

    #[test]
    fn test_aborted_batch_records_no_renders() {
        assert_eq!(BatchOutcome::Aborted.label(), "aborted");
        assert_eq!(BatchOutcome::Aborted.render_counts(), (0, 0));
        assert_eq!(
            BatchOutcome::Partial {
                rendered: 3,
                failed: 2
            }
            .render_counts(),
            (3, 2)
        );
        assert_eq!(
            BatchOutcome::Completed { rendered: 5 }.render_counts(),
            (5, 0)
        );
    }

    #[test]
    fn test_http_metrics_are_encoded() {
        HttpMetrics::record_request("GET", "/generate", 200, Duration::from_millis(1));

        let output = encode_metrics().unwrap();
        assert!(output.contains("scaffold_http_requests_total"));
        assert!(output.contains("path=\"/generate\""));
    }
}
