//! StormGlass weather API client.
//!
//! Fetches hourly marine forecast points for a coordinate and normalizes the
//! per-model response layout into [`ForecastPoint`]s.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use super::cache::TtlCache;
use super::ForecastSource;
use crate::config::StormGlassConfig;
use crate::error::{Result, SurfcastError};
use crate::models::ForecastPoint;

/// Fields requested from the point endpoint
pub const STORMGLASS_PARAMS: &str =
    "swellDirection,swellHeight,swellPeriod,waveDirection,waveHeight,wavePeriod,windDirection,windSpeed";

/// One field of a StormGlass hour: values keyed by model name
type SourceValues = HashMap<String, Option<f64>>;

#[derive(Debug, Deserialize)]
struct StormGlassForecastResponse {
    #[serde(default)]
    hours: Vec<StormGlassPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StormGlassPoint {
    time: String,
    #[serde(default)]
    swell_direction: SourceValues,
    #[serde(default)]
    swell_height: SourceValues,
    #[serde(default)]
    swell_period: SourceValues,
    #[serde(default)]
    wave_direction: SourceValues,
    #[serde(default)]
    wave_height: SourceValues,
    #[serde(default)]
    wave_period: SourceValues,
    #[serde(default)]
    wind_direction: SourceValues,
    #[serde(default)]
    wind_speed: SourceValues,
}

impl StormGlassPoint {
    /// Convert to a forecast point, or `None` when any field lacks a value for `source`
    fn into_forecast_point(self, source: &str) -> Option<ForecastPoint> {
        let value = |values: &SourceValues| values.get(source).copied().flatten();

        Some(ForecastPoint {
            swell_direction: value(&self.swell_direction)?,
            swell_height: value(&self.swell_height)?,
            swell_period: value(&self.swell_period)?,
            wave_direction: value(&self.wave_direction)?,
            wave_height: value(&self.wave_height)?,
            wave_period: value(&self.wave_period)?,
            wind_direction: value(&self.wind_direction)?,
            wind_speed: value(&self.wind_speed)?,
            time: self.time,
        })
    }
}

/// Client for the StormGlass point forecast endpoint
#[derive(Debug)]
pub struct StormGlass {
    client: Client,
    config: StormGlassConfig,
    forecast_days: u32,
    cache: TtlCache<String, Vec<ForecastPoint>>,
}

impl StormGlass {
    /// Create a client with its own HTTP connection pool
    pub fn new(config: StormGlassConfig, forecast_days: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SurfcastError::ClientRequest {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, config, forecast_days))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(client: Client, config: StormGlassConfig, forecast_days: u32) -> Self {
        let cache = TtlCache::new(Duration::from_secs(config.cache_ttl_secs));
        Self {
            client,
            config,
            forecast_days,
            cache,
        }
    }

    fn point_url(&self) -> String {
        format!("{}/weather/point", self.config.api_url.trim_end_matches('/'))
    }

    fn cache_key(lat: f64, lng: f64) -> String {
        format!("{},{}", lat, lng)
    }

    async fn request_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>> {
        let end = (Utc::now() + ChronoDuration::days(i64::from(self.forecast_days))).timestamp();
        let url = self.point_url();

        debug!(url = %url, lat = lat, lng = lng, end = end, "Requesting StormGlass points");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.config.api_token)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("params", STORMGLASS_PARAMS.to_string()),
                ("source", self.config.source.clone()),
                ("end", end.to_string()),
            ])
            .send()
            .await
            .map_err(|e| SurfcastError::ClientRequest {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SurfcastError::ClientRequest {
                message: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(SurfcastError::ProviderResponse {
                status: status.as_u16(),
                body,
            });
        }

        normalize_response(&body, &self.config.source)
    }
}

#[async_trait]
impl ForecastSource for StormGlass {
    #[instrument(skip(self))]
    async fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>> {
        let key = Self::cache_key(lat, lng);
        if let Some(points) = self.cache.get(&key) {
            debug!(count = points.len(), "Using cached StormGlass points");
            return Ok(points);
        }

        let points = self.request_points(lat, lng).await?;
        self.cache.insert(key, points.clone());
        debug!(
            count = points.len(),
            cached_locations = self.cache.len(),
            "Fetched StormGlass points"
        );
        Ok(points)
    }
}

/// Parse a point endpoint body, keeping only hours complete for `source`
pub fn normalize_response(body: &str, source: &str) -> Result<Vec<ForecastPoint>> {
    let response: StormGlassForecastResponse =
        serde_json::from_str(body).map_err(|e| SurfcastError::ClientRequest {
            message: format!("Invalid response body: {}", e),
        })?;

    let total = response.hours.len();
    let points: Vec<ForecastPoint> = response
        .hours
        .into_iter()
        .filter_map(|hour| hour.into_forecast_point(source))
        .collect();

    if points.len() < total {
        debug!(
            dropped = total - points.len(),
            source = source,
            "Dropped incomplete StormGlass hours"
        );
    }

    Ok(points)
}
