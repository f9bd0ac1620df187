//! Dashboard aggregation over stored metric samples.
//!
//! One request drives one aggregation pass: resolve the time window, fetch
//! each tracked series' samples, derive its current value and trend, and
//! merge the histories into a single date-indexed table for multi-line
//! charts. Everything here is recomputed per call; nothing is cached or
//! persisted, so unchanged data yields identical output.

mod table;
mod trend;
mod window;

pub use table::TrendRow;
pub use trend::{summarize, TrendSummary};
pub use window::TimeRange;

use crate::error::Result;
use crate::state::SampleStore;
use crate::types::{Attributes, MetricSample, SeriesName};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

/// One history entry in a series payload: the sample's timestamp, its value,
/// and any open-ended attributes recorded with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Aggregated output for one series over the requested window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub current_value: f64,
    pub trend_percent: f64,
    pub history: Vec<HistoryPoint>,
}

/// Full dashboard payload: one entry per tracked series, plus the
/// cross-series table under `trends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(flatten)]
    pub series: BTreeMap<SeriesName, SeriesSummary>,
    pub trends: Vec<TrendRow>,
}

/// Aggregates stored samples into the dashboard payload.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<SampleStore>,
}

impl DashboardService {
    pub fn new(store: Arc<SampleStore>) -> Self {
        Self { store }
    }

    /// Build the full dashboard payload for the requested window.
    ///
    /// The per-series fetches are independent read-only queries and run
    /// concurrently. Any store failure fails the whole request; there is no
    /// partial payload.
    #[instrument(skip(self), fields(range = %range.as_str()))]
    pub async fn dashboard_data(&self, range: TimeRange) -> Result<DashboardData> {
        let started = Instant::now();
        let start = range.start();

        let fetches = SeriesName::ALL.map(|name| {
            let store = Arc::clone(&self.store);
            async move { store.samples_since(name, start).await.map(|samples| (name, samples)) }
        });
        let fetched = try_join_all(fetches).await?;

        let mut series = BTreeMap::new();
        for (name, samples) in fetched {
            series.insert(name, summarize_series(samples));
        }
        let trends = table::build(&series);

        metrics::histogram!("pulse_dashboard_aggregation_seconds")
            .record(started.elapsed().as_secs_f64());

        Ok(DashboardData { series, trends })
    }
}

/// Fold one series' window-ascending samples into its summary payload.
fn summarize_series(samples: Vec<MetricSample>) -> SeriesSummary {
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    let TrendSummary { current_value, trend_percent } = trend::summarize(&values);

    let history = samples
        .into_iter()
        .map(|s| HistoryPoint { date: s.observed_at, value: s.value, attributes: s.attributes })
        .collect();

    SeriesSummary { current_value, trend_percent, history }
}
