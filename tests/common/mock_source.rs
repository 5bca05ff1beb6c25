//! In-memory forecast source for driving the aggregator without a network.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use surfcast::{ForecastPoint, ForecastSource, Result, SurfcastError};

/// Returns canned points keyed by latitude, optionally failing for one latitude
#[derive(Default)]
pub struct MockSource {
    points: HashMap<String, Vec<ForecastPoint>>,
    failing_lat: Option<f64>,
    calls: Mutex<usize>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(mut self, lat: f64, points: Vec<ForecastPoint>) -> Self {
        self.points.insert(lat.to_string(), points);
        self
    }

    pub fn failing_at(mut self, lat: f64) -> Self {
        self.failing_lat = Some(lat);
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl ForecastSource for MockSource {
    async fn fetch_points(&self, lat: f64, _lng: f64) -> Result<Vec<ForecastPoint>> {
        *self.calls.lock() += 1;
        if self.failing_lat == Some(lat) {
            return Err(SurfcastError::ClientRequest {
                message: "Network Error".to_string(),
            });
        }
        Ok(self.points.get(&lat.to_string()).cloned().unwrap_or_default())
    }
}
