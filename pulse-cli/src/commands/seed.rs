//! `pulse seed` command

use crate::client::PulseClient;
use anyhow::Result;
use serde::Deserialize;

#[derive(Deserialize)]
struct SeedResponse {
    inserted: u64,
}

/// Reset the store and load demo data.
pub async fn seed(client: &PulseClient, days: Option<u32>) -> Result<()> {
    let path = match days {
        Some(days) => format!("/api/seed?days={}", days),
        None => "/api/seed".to_string(),
    };

    let response: SeedResponse = client.post_empty(&path).await?;
    println!("Seeded {} samples", response.inserted);

    Ok(())
}
