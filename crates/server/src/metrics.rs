//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Cinedeck server:
//! - HTTP request metrics (latency, counts, in flight)
//! - Pre-rendered page count
//! - Core catalog and live stats metrics (registered from `cinedeck_core`)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cinedeck_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinedeck_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "cinedeck_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Page Metrics
// =============================================================================

/// Detail pages rendered at startup.
pub static PRERENDERED_PAGES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "cinedeck_prerendered_pages",
        "Number of detail pages rendered at startup",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();
    registry
        .register(Box::new(PRERENDERED_PAGES.clone()))
        .unwrap();

    for metric in cinedeck_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Normalize a path for metric labels (replace ids with placeholders).
///
/// Only routes with an id segment are rewritten, so arbitrary 404 paths
/// collapse into a single label.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

    match segments.as_slice() {
        [] => "/".to_string(),
        ["movies", _] => "/movies/{id}".to_string(),
        ["movies", "ssr", _] => "/movies/ssr/{id}".to_string(),
        ["api", "v1", "movies", _] => "/api/v1/movies/{id}".to_string(),
        ["api", "v1", "movies", _, "live"] => "/api/v1/movies/{id}/live".to_string(),
        ["comparison"] | ["metrics"] | ["api", "v1", "health"] | ["api", "v1", "config"]
        | ["api", "v1", "movies"] => trimmed.to_string(),
        _ => "other".to_string(),
    }
}
