//! Surf quality rating.
//!
//! A [`Rating`] is bound to the direction a beach faces and scores forecast
//! points on a 1 to 5 scale from three sub-scores:
//!
//! - wind against wave geometry (1, 3 or 5)
//! - swell period band (1, 2, 4 or 5)
//! - swell height band (1, 2, 3 or 5)
//!
//! The final rating is the rounded mean of the three.

pub mod compass;

pub use compass::{normalize_degrees, resolve_octant};

use crate::models::{Beach, ForecastPoint, Octant};

/// Lowest possible rating
pub const MIN_RATING: u8 = 1;
/// Highest possible rating
pub const MAX_RATING: u8 = 5;

/// Lower bounds (seconds) of the swell period bands and their scores
const SWELL_PERIOD_BANDS: [(f64, u8); 3] = [(14.0, 5), (10.0, 4), (7.0, 2)];

/// Lower bounds (meters) of the swell height bands and their scores
const SWELL_HEIGHT_BANDS: [(f64, u8); 3] = [(2.0, 5), (1.0, 3), (0.3, 2)];

/// Rates forecast points for one beach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    position: Octant,
}

impl Rating {
    pub fn new(beach: &Beach) -> Self {
        Self::for_position(beach.position)
    }

    pub fn for_position(position: Octant) -> Self {
        Self { position }
    }

    /// Direction the rated beach faces
    pub fn position(&self) -> Octant {
        self.position
    }

    /// Compute the 1..=5 rating for a point.
    ///
    /// The point is expected to have passed [`ForecastPoint::validate`].
    pub fn rate(&self, point: &ForecastPoint) -> u8 {
        let swell_position = resolve_octant(point.swell_direction);
        let wind_position = resolve_octant(point.wind_direction);

        let wind_and_wave = self.wind_and_wave_rating(swell_position, wind_position);
        let swell_height = swell_height_rating(point.swell_height);
        let swell_period = swell_period_rating(point.swell_period);

        let mean = f64::from(wind_and_wave + swell_height + swell_period) / 3.0;
        (mean.round() as u8).clamp(MIN_RATING, MAX_RATING)
    }

    /// Score how the wind meets the incoming waves.
    ///
    /// Wind from the same octant as the waves is onshore (1). Wind from the
    /// opposite octant is offshore (5). Everything else is cross-shore (3).
    pub fn wind_and_wave_rating(&self, wave_position: Octant, wind_position: Octant) -> u8 {
        if wave_position == wind_position {
            1
        } else if wind_position == wave_position.opposite() {
            5
        } else {
            3
        }
    }
}

/// Score the swell period in seconds; longer swells are more organized
pub fn swell_period_rating(period: f64) -> u8 {
    band_rating(period, &SWELL_PERIOD_BANDS)
}

/// Score the swell height in meters
pub fn swell_height_rating(height: f64) -> u8 {
    band_rating(height, &SWELL_HEIGHT_BANDS)
}

fn band_rating(value: f64, bands: &[(f64, u8)]) -> u8 {
    bands
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map(|(_, score)| *score)
        .unwrap_or(MIN_RATING)
}
