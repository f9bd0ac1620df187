//! Sample storage with SQLite persistence.
//!
//! The SampleStore holds all recorded metric samples. Reads are snapshot
//! queries over a connection pool; the aggregator treats the store as a
//! reliable data source and propagates its failures unchanged.

use crate::error::{PulseError, Result};
use crate::types::{Attributes, MetricSample, NewSample, SeriesName};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

pub mod migrations;


/// Persistent store for metric samples.
#[derive(Clone)]
pub struct SampleStore {
    pool: SqlitePool,
}

impl SampleStore {
    /// Create a new SampleStore with an in-memory database (for tests).
    pub async fn new_in_memory() -> Result<Self> {
        Self::new(":memory:").await
    }

    /// Get a reference to the underlying SQLite pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a new SampleStore with a database at the specified path.
    #[instrument(skip(db_path))]
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        info!("Opening sample store at {:?}", db_path);

        // Create parent directory if it doesn't exist (but not for :memory:)
        if db_path != Path::new(":memory:") {
            if let Some(parent) = db_path.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| PulseError::InvalidConfig {
                    reason: format!("Failed to create directory {}: {}", parent.display(), e),
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(db_path.to_str().ok_or_else(|| {
            PulseError::InvalidConfig { reason: "Invalid database path".to_string() }
        })?)
        .map_err(|e| PulseError::DatabaseError(e.to_string()))?
        .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| PulseError::DatabaseError(e.to_string()))?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    async fn run_migrations(&self) -> Result<()> {
        migrations::run(&self.pool).await
    }

    /// Insert a new sample. `observed_at` defaults to now when omitted.
    ///
    /// Returns the stored sample with its assigned id and the timestamp
    /// truncated to the second granularity the store keeps.
    #[instrument(skip(self, sample), fields(series = %sample.series))]
    pub async fn insert_sample(&self, sample: NewSample) -> Result<MetricSample> {
        let observed_at = sample.observed_at.unwrap_or_else(Utc::now);
        let observed_secs = observed_at.timestamp();
        let attributes_json = serde_json::to_string(&sample.attributes).map_err(|e| {
            PulseError::DatabaseError(format!("Failed to serialize attributes: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO metric_samples (series, value, observed_at, attributes)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(sample.series.as_str())
        .bind(sample.value)
        .bind(observed_secs)
        .bind(&attributes_json)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            metrics::counter!("pulse_db_query_failures_total", "operation" => "insert_sample")
                .increment(1);
            PulseError::DatabaseError(e.to_string())
        })?;

        Ok(MetricSample {
            id: result.last_insert_rowid(),
            series: sample.series,
            value: sample.value,
            observed_at: datetime_from_secs(observed_secs)?,
            attributes: sample.attributes,
        })
    }

    /// All samples for a series observed at or after `start`, ascending by
    /// timestamp (insertion order breaks ties).
    ///
    /// An empty result is not an error; a series with no samples in the
    /// window simply contributes nothing.
    #[instrument(skip(self), fields(series = %series))]
    pub async fn samples_since(
        &self,
        series: SeriesName,
        start: DateTime<Utc>,
    ) -> Result<Vec<MetricSample>> {
        let rows = sqlx::query(
            r#"
            SELECT id, series, value, observed_at, attributes
            FROM metric_samples
            WHERE series = ? AND observed_at >= ?
            ORDER BY observed_at ASC, id ASC
            "#,
        )
        .bind(series.as_str())
        .bind(start.timestamp())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            metrics::counter!("pulse_db_query_failures_total", "operation" => "samples_since")
                .increment(1);
            PulseError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(row_to_sample).collect()
    }

    /// Delete every stored sample. Used by the seeder's bulk reset.
    #[instrument(skip(self))]
    pub async fn clear_samples(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM metric_samples")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                metrics::counter!("pulse_db_query_failures_total", "operation" => "clear_samples")
                    .increment(1);
                PulseError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    /// Total number of stored samples. Doubles as the health probe query.
    pub async fn sample_count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM metric_samples")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                metrics::counter!("pulse_db_query_failures_total", "operation" => "sample_count")
                    .increment(1);
                PulseError::DatabaseError(e.to_string())
            })
    }
}

fn row_to_sample(row: SqliteRow) -> Result<MetricSample> {
    let series: String = row.get("series");
    let series = SeriesName::from_str(&series)?;

    let attributes: String = row.get("attributes");
    let attributes: Attributes = serde_json::from_str(&attributes)
        .map_err(|e| PulseError::DatabaseError(format!("Malformed attributes JSON: {}", e)))?;

    Ok(MetricSample {
        id: row.get("id"),
        series,
        value: row.get("value"),
        observed_at: datetime_from_secs(row.get("observed_at"))?,
        attributes,
    })
}

fn datetime_from_secs(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| PulseError::DatabaseError(format!("Timestamp out of range: {}", secs)))
}
