//! Forecast aggregation across beaches.
//!
//! Fetches raw points for every beach, rates them, and regroups the result
//! into per-timestamp buckets ordered from best to worst surf.

use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::clients::ForecastSource;
use crate::config::FetchMode;
use crate::error::{Result, SurfcastError};
use crate::logging::{log_operation_end, log_operation_start};
use crate::models::{Beach, BeachForecast, ForecastPoint, TimeForecast};
use crate::rating::Rating;

/// Produces ranked, time-bucketed forecasts for a set of beaches
#[derive(Clone)]
pub struct Forecast {
    source: Arc<dyn ForecastSource>,
    fetch_mode: FetchMode,
}

impl Forecast {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self {
            source,
            fetch_mode: FetchMode::Sequential,
        }
    }

    pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    /// Rate every beach's forecast points and group them by timestamp.
    ///
    /// Any failure aborts the whole call: it is logged, then returned as a
    /// single [`SurfcastError::ForecastProcessing`] carrying the cause's message.
    pub async fn process_forecast_for_beaches(
        &self,
        beaches: &[Beach],
    ) -> Result<Vec<TimeForecast>> {
        let start = Instant::now();
        log_operation_start("process_forecast", Some(&format!("{} beaches", beaches.len())));

        let beach_forecast = match self.calculate_rating(beaches).await {
            Ok(beach_forecast) => beach_forecast,
            Err(cause) => {
                error!(error = %cause, "Forecast processing failed");
                log_operation_end("process_forecast", start, false);
                return Err(SurfcastError::ForecastProcessing {
                    message: cause.to_string(),
                });
            }
        };

        let mut time_forecast = map_forecast_by_time(beach_forecast);
        for bucket in &mut time_forecast {
            // sort_by is stable, equal ratings keep their fetch order
            bucket.forecast.sort_by(|a, b| b.rating.cmp(&a.rating));
        }

        log_operation_end("process_forecast", start, true);
        Ok(time_forecast)
    }

    async fn calculate_rating(&self, beaches: &[Beach]) -> Result<Vec<BeachForecast>> {
        info!("Preparing the forecast for {} beaches", beaches.len());

        let mut points_with_correct_sources = Vec::new();
        match self.fetch_mode {
            FetchMode::Sequential => {
                for beach in beaches {
                    let points = self.source.fetch_points(beach.lat, beach.lng).await?;
                    points_with_correct_sources.extend(enrich_beach_data(points, beach)?);
                }
            }
            FetchMode::Concurrent => {
                let fetches = beaches
                    .iter()
                    .map(|beach| self.source.fetch_points(beach.lat, beach.lng));
                // try_join_all yields results in input order
                let all_points = try_join_all(fetches).await?;
                for (beach, points) in beaches.iter().zip(all_points) {
                    points_with_correct_sources.extend(enrich_beach_data(points, beach)?);
                }
            }
        }

        Ok(points_with_correct_sources)
    }
}

/// Attach beach identity and a rating to each of the beach's points
pub fn enrich_beach_data(points: Vec<ForecastPoint>, beach: &Beach) -> Result<Vec<BeachForecast>> {
    let rating = Rating::new(beach);
    points
        .into_iter()
        .map(|point| {
            point.validate()?;
            let score = rating.rate(&point);
            Ok(BeachForecast::new(beach, point, score))
        })
        .collect()
}

/// Group forecasts by exact timestamp, in order of first appearance
pub fn map_forecast_by_time(forecast: Vec<BeachForecast>) -> Vec<TimeForecast> {
    let mut forecast_by_time: Vec<TimeForecast> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for point in forecast {
        match index.get(&point.time) {
            Some(&idx) => forecast_by_time[idx].forecast.push(point),
            None => {
                index.insert(point.time.clone(), forecast_by_time.len());
                forecast_by_time.push(TimeForecast {
                    time: point.time.clone(),
                    forecast: vec![point],
                });
            }
        }
    }

    forecast_by_time
}
