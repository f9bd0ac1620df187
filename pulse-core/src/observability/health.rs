//! Daemon health tracking.

use crate::state::SampleStore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Overall system health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health of a single subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct SubsystemHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health report served by the API.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub subsystems: BTreeMap<String, SubsystemHealth>,
}

/// Tracks registered subsystems and probes the database on demand.
#[derive(Clone, Default)]
pub struct HealthChecker {
    subsystems: Arc<RwLock<BTreeMap<String, SubsystemHealth>>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) a subsystem's status.
    pub async fn set(&self, name: &str, status: HealthStatus, message: Option<String>) {
        let mut subsystems = self.subsystems.write().await;
        subsystems.insert(name.to_string(), SubsystemHealth { status, message });
    }

    /// Probe the store and fold every subsystem into an overall report.
    ///
    /// The database entry is refreshed on every call; a failing probe marks
    /// it unhealthy with the underlying error message.
    pub async fn report(&self, store: &SampleStore) -> HealthReport {
        let database = match store.sample_count().await {
            Ok(_) => SubsystemHealth { status: HealthStatus::Healthy, message: None },
            Err(e) => {
                SubsystemHealth { status: HealthStatus::Unhealthy, message: Some(e.to_string()) }
            }
        };

        let mut subsystems = self.subsystems.read().await.clone();
        subsystems.insert("database".to_string(), database);

        let status = if subsystems.values().any(|s| s.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if subsystems.values().any(|s| s.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        HealthReport { status, version: env!("CARGO_PKG_VERSION"), subsystems }
    }
}
