//! Prometheus metrics for backend calls made by the document client.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

/// Request counter by operation and outcome.
///
/// `outcome` is the HTTP status code, or `transport_error` when no response arrived.
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "document_client_requests_total",
        "Total number of requests sent to the document backend",
        &["operation", "outcome"]
    )
    .expect("Failed to register document_client_requests_total")
});

pub fn record_response(operation: &str, status: reqwest::StatusCode) {
    REQUESTS_TOTAL
        .with_label_values(&[operation, status.as_str()])
        .inc();
}

pub fn record_transport_error(operation: &str) {
    REQUESTS_TOTAL
        .with_label_values(&[operation, "transport_error"])
        .inc();
}

/// Encode all registered metrics in the Prometheus text format.
pub fn gather_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_appear_in_export() {
        record_response("list_documents", reqwest::StatusCode::OK);
        record_transport_error("search_documents");

        let output = gather_metrics();
        assert!(output.contains("document_client_requests_total"));
        assert!(output.contains("transport_error"));
    }
}
