//! Fixture beaches, forecast points and provider payloads.

use surfcast::{Beach, ForecastPoint, Octant};

pub const T1: &str = "2020-04-26T00:00:00+00:00";
pub const T2: &str = "2020-04-26T01:00:00+00:00";

pub const MANLY_LAT: f64 = -33.792726;
pub const DEE_WHY_LAT: f64 = -33.75;

pub fn manly() -> Beach {
    Beach {
        lat: MANLY_LAT,
        lng: 151.289824,
        name: "Manly".to_string(),
        position: Octant::E,
        user: "alice".to_string(),
    }
}

pub fn dee_why() -> Beach {
    Beach {
        lat: DEE_WHY_LAT,
        lng: 151.299,
        name: "Dee Why".to_string(),
        position: Octant::E,
        user: "bob".to_string(),
    }
}

/// Easterly swell under a westerly wind, rated by swell size alone
pub fn point(time: &str, swell_height: f64, swell_period: f64) -> ForecastPoint {
    ForecastPoint {
        time: time.to_string(),
        wave_height: swell_height,
        wave_period: swell_period,
        wave_direction: 231.38,
        wind_speed: 10.0,
        wind_direction: 270.0,
        swell_height,
        swell_period,
        swell_direction: 92.0,
    }
}

/// Manly: T1 (rated 2), T1 (rated 5). Dee Why: T1 (rated 4), T2 (rated 3).
pub fn two_beach_points() -> Vec<(f64, Vec<ForecastPoint>)> {
    vec![
        (MANLY_LAT, vec![point(T1, 0.2, 5.0), point(T1, 2.5, 16.0)]),
        (DEE_WHY_LAT, vec![point(T1, 1.5, 12.0), point(T2, 0.6, 9.0)]),
    ]
}

/// A StormGlass point endpoint payload with two complete hours and one incomplete
pub fn stormglass_response() -> serde_json::Value {
    serde_json::json!({
        "hours": [
            {
                "time": T1,
                "swellDirection": {"noaa": 64.26},
                "swellHeight": {"noaa": 0.15},
                "swellPeriod": {"noaa": 3.89},
                "waveDirection": {"noaa": 231.38},
                "waveHeight": {"noaa": 0.47},
                "wavePeriod": {"noaa": 3.89},
                "windDirection": {"noaa": 299.45},
                "windSpeed": {"noaa": 100.0}
            },
            {
                "time": T2,
                "swellDirection": {"noaa": 123.41},
                "swellHeight": {"noaa": 0.21},
                "swellPeriod": {"noaa": 3.67},
                "waveDirection": {"noaa": 232.12},
                "waveHeight": {"noaa": 0.46},
                "wavePeriod": {"noaa": 3.67},
                "windDirection": {"noaa": 310.48},
                "windSpeed": {"noaa": 100.0}
            },
            {
                "time": "2020-04-26T02:00:00+00:00",
                "swellDirection": {"meteo": 182.56},
                "swellHeight": {"noaa": 0.28},
                "swellPeriod": {"noaa": 3.44},
                "waveDirection": {"noaa": 232.86},
                "waveHeight": {"noaa": 0.46},
                "wavePeriod": {"noaa": 3.44},
                "windDirection": {"noaa": 321.5},
                "windSpeed": {"noaa": 100.0}
            }
        ],
        "meta": {"cost": 1, "dailyQuota": 10, "requestCount": 1}
    })
}
