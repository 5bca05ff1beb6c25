//! Domain records shared by the rating engine, the aggregator and the HTTP layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SurfcastError};

/// One of the eight compass octants.
///
/// Used both for the direction a beach faces and for classified wind and
/// swell bearings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Octant {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Octant {
    /// All octants in clockwise order starting at north
    pub const ALL: [Octant; 8] = [
        Octant::N,
        Octant::NE,
        Octant::E,
        Octant::SE,
        Octant::S,
        Octant::SW,
        Octant::W,
        Octant::NW,
    ];

    /// The octant diametrically opposite this one
    pub fn opposite(self) -> Octant {
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + 4) % 8]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Octant::N => "N",
            Octant::NE => "NE",
            Octant::E => "E",
            Octant::SE => "SE",
            Octant::S => "S",
            Octant::SW => "SW",
            Octant::W => "W",
            Octant::NW => "NW",
        }
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surf spot and its static facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Display name
    pub name: String,
    /// Direction the beach faces
    pub position: Octant,
    /// Opaque reference to the owning user
    pub user: String,
}

impl Beach {
    /// Check that the beach can be used to query a forecast
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SurfcastError::InvalidBeach {
                message: "Beach name cannot be empty".to_string(),
            });
        }
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(SurfcastError::InvalidBeach {
                message: format!("Latitude {} of {} is out of range", self.lat, self.name),
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(SurfcastError::InvalidBeach {
                message: format!("Longitude {} of {} is out of range", self.lng, self.name),
            });
        }
        Ok(())
    }
}

/// A single forecast instant for one location, as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// ISO-8601 timestamp, used verbatim as a grouping key
    pub time: String,
    pub wave_height: f64,
    pub wave_period: f64,
    pub wave_direction: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub swell_direction: f64,
}

impl ForecastPoint {
    /// Reject values that would make a rating meaningless.
    ///
    /// Directions only need to be finite since they are normalized modulo 360.
    /// Magnitudes must additionally be non-negative.
    pub fn validate(&self) -> Result<()> {
        let directions = [
            ("waveDirection", self.wave_direction),
            ("windDirection", self.wind_direction),
            ("swellDirection", self.swell_direction),
        ];
        for (field, value) in directions {
            if !value.is_finite() {
                return Err(invalid_point(field, value, &self.time));
            }
        }

        let magnitudes = [
            ("waveHeight", self.wave_height),
            ("wavePeriod", self.wave_period),
            ("windSpeed", self.wind_speed),
            ("swellHeight", self.swell_height),
            ("swellPeriod", self.swell_period),
        ];
        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_point(field, value, &self.time));
            }
        }

        Ok(())
    }
}

fn invalid_point(field: &str, value: f64, time: &str) -> SurfcastError {
    SurfcastError::InvalidForecastPoint {
        field: field.to_string(),
        message: format!("value {} at {} is not usable for rating", value, time),
    }
}

/// A forecast point enriched with the beach it belongs to and its rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachForecast {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub position: Octant,
    /// Surf quality, always within 1..=5
    pub rating: u8,
    pub time: String,
    pub wave_height: f64,
    pub wave_period: f64,
    pub wave_direction: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub swell_direction: f64,
}

impl BeachForecast {
    /// Build the enriched record field by field from its two sources
    pub fn new(beach: &Beach, point: ForecastPoint, rating: u8) -> Self {
        Self {
            lat: beach.lat,
            lng: beach.lng,
            name: beach.name.clone(),
            position: beach.position,
            rating,
            time: point.time,
            wave_height: point.wave_height,
            wave_period: point.wave_period,
            wave_direction: point.wave_direction,
            wind_speed: point.wind_speed,
            wind_direction: point.wind_direction,
            swell_height: point.swell_height,
            swell_period: point.swell_period,
            swell_direction: point.swell_direction,
        }
    }
}

/// All beaches' forecasts for one timestamp, best rated first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeForecast {
    pub time: String,
    pub forecast: Vec<BeachForecast>,
}
