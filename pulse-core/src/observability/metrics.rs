//! Core metric definitions.
//!
//! All metrics follow Prometheus naming conventions:
//! - `_total` suffix for counters
//! - `_seconds` suffix for histograms measuring duration

use metrics::{describe_counter, describe_histogram};

/// Register all core metrics with descriptions.
///
/// This ensures metrics appear in `/metrics` with proper metadata.
pub fn register_core_metrics() {
    // Dashboard metrics
    describe_counter!(
        "pulse_dashboard_requests_total",
        "Total number of dashboard requests served (by time range)"
    );
    describe_histogram!(
        "pulse_dashboard_aggregation_seconds",
        "Time spent aggregating one dashboard payload"
    );

    // Ingestion metrics
    describe_counter!(
        "pulse_samples_ingested_total",
        "Total number of metric samples accepted for storage (by series)"
    );
    describe_counter!("pulse_seed_runs_total", "Total number of bulk demo-data reseeds");

    // Database metrics
    describe_counter!(
        "pulse_db_query_failures_total",
        "Total database query failures (by operation)"
    );
}
