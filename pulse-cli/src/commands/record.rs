//! `pulse record` command

use crate::client::PulseClient;
use anyhow::Result;
use chrono::{DateTime, Utc};
use pulse_core::{MetricSample, NewSample, SeriesName};
use std::str::FromStr;

/// Record one sample via the daemon.
pub async fn record(client: &PulseClient, series: &str, value: f64, at: Option<&str>) -> Result<()> {
    let series = SeriesName::from_str(series)?;
    let observed_at = at
        .map(|s| DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)))
        .transpose()?;

    let sample = NewSample { series, value, observed_at, attributes: Default::default() };
    let stored: MetricSample = client.post_json("/api/samples", &sample).await?;

    println!(
        "Recorded {} = {} at {}",
        stored.series,
        stored.value,
        stored.observed_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
