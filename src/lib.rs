//! # surfcast
//!
//! A surf forecast server that rates and ranks beach conditions over time.
//!
//! For every configured beach, surfcast fetches hourly marine forecast points
//! from StormGlass, scores each point from 1 to 5, and serves all beaches'
//! points grouped by timestamp with the best surf first.
//!
//! ## Architecture
//!
//! - **Rating**: compass classification of wind and swell bearings, and the
//!   1 to 5 score built from wind geometry, swell period and swell height
//! - **Forecast**: fetches, rates and regroups points across beaches
//! - **Clients**: the StormGlass HTTP client behind the [`ForecastSource`] trait
//! - **API Layer**: `GET /forecast` and `GET /heartbeat`

pub mod beach_loader;
pub mod clients;
pub mod config;
pub mod error;
pub mod forecast;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod rating;
pub mod state;

pub use clients::{ForecastSource, StormGlass};
pub use config::{Config, FetchMode};
pub use error::{Result, SurfcastError};
pub use forecast::Forecast;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_error, log_operation_end,
    log_operation_start, log_request_error,
};
pub use models::{Beach, BeachForecast, ForecastPoint, Octant, TimeForecast};
pub use rating::{resolve_octant, Rating};
pub use state::AppState;
