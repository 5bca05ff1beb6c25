//! Application state management for surfcast.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the configuration, the known beaches and the forecast service.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::beach_loader::beaches_for_user;
use crate::clients::{ForecastSource, StormGlass};
use crate::config::Config;
use crate::error::{Result, SurfcastError};
use crate::forecast::Forecast;
use crate::models::Beach;

/// The main application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Every beach the server knows about
    pub beaches: Vec<Beach>,
    /// Aggregator used to answer forecast requests
    pub forecast: Forecast,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("beaches", &self.beaches)
            .field("fetch_mode", &self.forecast.fetch_mode())
            .finish()
    }
}

impl AppState {
    /// Create a new AppState around any forecast source
    pub fn new(config: Config, beaches: Vec<Beach>, source: Arc<dyn ForecastSource>) -> Self {
        let forecast = Forecast::new(source).with_fetch_mode(config.forecast.fetch_mode);
        Self {
            config,
            beaches,
            forecast,
        }
    }

    /// Create the state backed by the StormGlass API
    pub fn with_stormglass(config: Config, beaches: Vec<Beach>) -> Result<Self> {
        let client = StormGlass::new(config.stormglass.clone(), config.forecast.forecast_days)?;
        Ok(Self::new(config, beaches, Arc::new(client)))
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        beaches: Vec<Beach>,
        source: Arc<dyn ForecastSource>,
    ) -> Arc<Self> {
        Arc::new(Self::new(config, beaches, source))
    }

    /// Beaches to forecast, optionally restricted to one owner
    pub fn select_beaches(&self, user: Option<&str>) -> Vec<Beach> {
        match user {
            Some(user) => beaches_for_user(&self.beaches, user),
            None => self.beaches.clone(),
        }
    }

    /// Number of distinct beach owners
    pub fn user_count(&self) -> usize {
        self.beaches
            .iter()
            .map(|b| b.user.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Validate that the application state is consistent and ready for use
    pub fn validate(&self) -> Result<()> {
        if self.beaches.is_empty() {
            return Err(SurfcastError::InvalidBeach {
                message: "No beaches configured".to_string(),
            });
        }

        for beach in &self.beaches {
            beach.validate()?;
        }

        Ok(())
    }
}
