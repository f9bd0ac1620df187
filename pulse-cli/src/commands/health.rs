//! `pulse health` command

use crate::client::PulseClient;
use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
struct HealthView {
    status: String,
    version: String,
    subsystems: BTreeMap<String, SubsystemView>,
}

#[derive(Deserialize)]
struct SubsystemView {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Query and print the daemon health report.
pub async fn health(client: &PulseClient) -> Result<()> {
    let report: HealthView = client.get_json("/api/health").await?;

    println!("pulsed {} ({})", report.version, report.status);
    for (name, subsystem) in &report.subsystems {
        match &subsystem.message {
            Some(message) => println!("  {:<12} {} ({})", name, subsystem.status, message),
            None => println!("  {:<12} {}", name, subsystem.status),
        }
    }

    Ok(())
}
