//! HTTP server implementation.
//!
//! Thin JSON adapters over pulse-core: no aggregation logic lives here.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pulse_core::observability::health::{HealthChecker, HealthReport};
use pulse_core::{
    seed, DashboardData, DashboardService, MetricSample, NewSample, PulseError, SampleStore,
    TimeRange,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<SampleStore>,
    dashboard: DashboardService,
    health: HealthChecker,
}

/// Build the API router.
pub fn router(store: Arc<SampleStore>, health: HealthChecker) -> Router {
    let state = AppState { dashboard: DashboardService::new(Arc::clone(&store)), store, health };

    Router::new()
        .route("/api/dashboard", get(dashboard))
        .route("/api/samples", post(record_sample))
        .route("/api/seed", post(run_seed))
        .route("/api/health", get(health_report))
        .with_state(state)
}

/// API-layer errors.
///
/// Persistence failures collapse to a generic 500; the dashboard UI gets no
/// series-level detail. The real cause is logged server-side only.
#[derive(Error, Debug)]
enum ApiError {
    #[error("could not load dashboard data")]
    DashboardUnavailable(#[source] PulseError),

    #[error("internal error")]
    Internal(#[from] PulseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = ?self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardQuery {
    #[serde(default)]
    time_range: Option<String>,
}

/// `GET /api/dashboard?timeRange=6m`
///
/// Unrecognized or missing tokens silently use the six-month default.
#[instrument(skip(state))]
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardData>, ApiError> {
    let range = TimeRange::parse(query.time_range.as_deref().unwrap_or_default());
    metrics::counter!("pulse_dashboard_requests_total", "range" => range.as_str()).increment(1);

    let data =
        state.dashboard.dashboard_data(range).await.map_err(ApiError::DashboardUnavailable)?;
    Ok(Json(data))
}

/// `POST /api/samples`: store one observation.
///
/// The series name is validated by deserialization against the fixed set;
/// `observedAt` defaults to now.
#[instrument(skip_all, fields(series = %sample.series))]
async fn record_sample(
    State(state): State<AppState>,
    Json(sample): Json<NewSample>,
) -> Result<(StatusCode, Json<MetricSample>), ApiError> {
    let stored = state.store.insert_sample(sample).await?;
    metrics::counter!("pulse_samples_ingested_total", "series" => stored.series.as_str())
        .increment(1);

    Ok((StatusCode::CREATED, Json(stored)))
}

#[derive(Debug, Deserialize)]
struct SeedQuery {
    #[serde(default)]
    days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SeedResponse {
    inserted: u64,
}

/// `POST /api/seed?days=90`: bulk reset. Clears every sample and regenerates
/// demo data.
#[instrument(skip(state))]
async fn run_seed(
    State(state): State<AppState>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<SeedResponse>, ApiError> {
    let days = query.days.unwrap_or(seed::DEFAULT_SEED_DAYS);
    let inserted = seed::seed(&state.store, days).await?;
    metrics::counter!("pulse_seed_runs_total").increment(1);

    info!(days, inserted, "Reseeded sample store");
    Ok(Json(SeedResponse { inserted }))
}

/// `GET /api/health`
#[instrument(skip(state))]
async fn health_report(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health.report(&state.store).await)
}
