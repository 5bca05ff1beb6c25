//! Clients for external forecast providers.

pub mod cache;
pub mod stormglass;

pub use cache::TtlCache;
pub use stormglass::StormGlass;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ForecastPoint;

/// Anything that can produce raw forecast points for a coordinate
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the forecast points for a latitude/longitude pair
    async fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>>;
}
