//! HTTP request handlers for the surfcast API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod forecast;
pub mod heartbeat;

pub use forecast::forecast_handler;
pub use heartbeat::heartbeat_handler;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the API router over the shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/forecast", get(forecast_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
