//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog loads (result, duration)
//! - Catalog cache lookups
//! - Simulated live stats

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Catalog loads by result.
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinedeck_catalog_loads_total", "Total catalog source loads"),
        &["result"], // "ok", "source_unavailable", "malformed_data"
    )
    .unwrap()
});

/// Catalog load duration in seconds.
pub static CATALOG_LOAD_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cinedeck_catalog_load_duration_seconds",
            "Time to read and parse the catalog source",
        )
        .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5]),
        &["result"],
    )
    .unwrap()
});

/// Catalog cache lookups ("hit" or "miss").
pub static CATALOG_CACHE_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "cinedeck_catalog_cache_lookups_total",
            "Catalog snapshot cache lookups",
        ),
        &["outcome"],
    )
    .unwrap()
});

// =============================================================================
// Live Stats Metrics
// =============================================================================

/// Simulated live stats generated.
pub static LIVE_STATS_GENERATED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "cinedeck_live_stats_generated_total",
        "Simulated live stats values generated",
    )
    .unwrap()
});

/// All core metrics, for registration in the server's registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(CATALOG_LOAD_DURATION.clone()),
        Box::new(CATALOG_CACHE_LOOKUPS.clone()),
        Box::new(LIVE_STATS_GENERATED.clone()),
    ]
}
