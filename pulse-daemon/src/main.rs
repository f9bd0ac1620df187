use pulse_core::observability::health::HealthStatus;
use pulse_core::{init_observability, Config, HealthChecker, SampleStore};
use std::sync::Arc;
use tracing::info;

mod api;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Initialize observability FIRST
    init_observability(config.metrics_port)?;

    info!("pulse daemon starting");

    let health = HealthChecker::new();
    health.set("daemon", HealthStatus::Healthy, None).await;

    // Env var wins over the config file for the database location
    let db_path = std::env::var("PULSE_DB_PATH").unwrap_or_else(|_| config.db_path.clone());
    info!("Opening sample store at {}", db_path);
    let store = Arc::new(SampleStore::new(&db_path).await?);

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP API listening on {}", addr);

    let app = api::router(store, health);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await?;

    info!("pulse daemon shutting down");
    Ok(())
}
