//! Observability infrastructure: tracing, metrics, health checks.
//!
//! Initialized once at daemon startup, before any other subsystem.

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod health;
pub mod metrics;

/// Initialize tracing and the Prometheus metrics exporter.
///
/// The exporter serves `/metrics` on its own listener at `metrics_port`.
///
/// # Panics
/// Panics if called more than once.
pub fn init(metrics_port: u16) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
        .init();

    PrometheusBuilder::new().with_http_listener(([0, 0, 0, 0], metrics_port)).install()?;

    metrics::register_core_metrics();

    tracing::info!(metrics_port, "Observability initialized");
    Ok(())
}
