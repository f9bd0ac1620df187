//! HTTP client for the pulse daemon.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_ADDR: &str = "http://127.0.0.1:4680";

/// JSON client over the daemon's HTTP API.
pub struct PulseClient {
    base: String,
    http: reqwest::Client,
}

impl PulseClient {
    /// Resolution order for the daemon address: explicit flag, `PULSE_ADDR`
    /// environment variable, then the local default.
    pub fn new(addr: Option<String>) -> Self {
        let base = addr
            .or_else(|| std::env::var("PULSE_ADDR").ok())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        Self { base, http: reqwest::Client::new() }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .context("Failed to reach pulsed. Is the daemon running?")?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await
            .context("Failed to reach pulsed. Is the daemon running?")?;
        Self::decode(response).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .send()
            .await
            .context("Failed to reach pulsed. Is the daemon running?")?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            anyhow::bail!("Daemon returned {}: {}", status, message);
        }
        response.json().await.context("Failed to decode daemon response")
    }
}
