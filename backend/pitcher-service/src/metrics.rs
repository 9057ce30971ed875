//! Prometheus metrics for pitcher-service.
//!
//! Exposes per-operation collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use std::time::Duration;

lazy_static! {
    /// Service operations processed, segmented by outcome (success or error kind).
    pub static ref REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pitcher_service_requests_total",
        "Total pitcher-service operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register pitcher_service_requests_total");

    /// Latency of service operations including every store round-trip.
    pub static ref OPERATION_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "pitcher_service_operation_duration_seconds",
        "Pitcher-service operation duration",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("failed to register pitcher_service_operation_duration_seconds");
}

pub fn record_operation(operation: &str, outcome: &str, elapsed: Duration) {
    REQUESTS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
    OPERATION_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(elapsed.as_secs_f64());
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
