//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual work.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{EnvironmentQuery, EnvironmentResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// GET /environment?city=<name>
///
/// Fetch and merge the current weather and air-quality snapshot for a city.
/// A missing or blank city is rejected before any upstream call is made.
pub async fn get_environment(
    State(state): State<AppState>,
    Query(query): Query<EnvironmentQuery>,
) -> HandlerResult<EnvironmentResponse> {
    let city = query.city.unwrap_or_default();
    let reading = state.aggregator.fetch_environment(&city).await?;
    Ok(Json(reading.into()))
}
