//! Forecast endpoint handler.
//!
//! Returns every beach's rated forecast grouped by time, best conditions first.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::SurfcastError;
use crate::logging::{generate_request_id, log_request_error};
use crate::state::AppState;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, Default)]
pub struct ForecastQuery {
    /// Only forecast beaches owned by this user
    #[serde(default)]
    pub user: Option<String>,
}

/// Handle GET /forecast requests
pub async fn forecast_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let beaches = state.select_beaches(params.user.as_deref());
    debug!(
        endpoint = "/forecast",
        request_id = %request_id,
        user = ?params.user,
        beach_count = beaches.len(),
        "Processing forecast query"
    );

    match state.forecast.process_forecast_for_beaches(&beaches).await {
        Ok(time_forecast) => {
            info!(
                endpoint = "/forecast",
                request_id = %request_id,
                buckets = time_forecast.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Forecast query successful"
            );
            (StatusCode::OK, Json(time_forecast)).into_response()
        }
        Err(error) => handle_forecast_error(error, &request_id, &params),
    }
}

/// Handle error responses for forecast queries.
///
/// Aggregation failures are all-or-nothing, so every error is a server error.
fn handle_forecast_error(
    error: SurfcastError,
    request_id: &str,
    params: &ForecastQuery,
) -> Response {
    log_request_error(
        &error,
        "/forecast",
        request_id,
        params.user.as_deref().map(|u| format!("user={}", u)).as_deref(),
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
