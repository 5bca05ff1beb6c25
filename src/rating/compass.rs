//! Compass geometry for wind and swell bearings.
//!
//! Bearings are classified into the cardinal octants with bands wider on the
//! north/south axis than a plain 45° split would give. These bands are the
//! ones the rating thresholds were calibrated against:
//!
//! | bearing (normalized)        | octant |
//! |-----------------------------|--------|
//! | `[310, 360)` or `[0, 50)`   | N      |
//! | `[50, 120)`                 | E      |
//! | `[120, 220)`                | S      |
//! | `[220, 310)`                | W      |
//!
//! Each band's lower edge belongs to it, so an edge resolves to the next band
//! clockwise.

use crate::models::Octant;

const NORTH_END: f64 = 50.0;
const EAST_END: f64 = 120.0;
const SOUTH_END: f64 = 220.0;
const WEST_END: f64 = 310.0;

/// Normalize any finite bearing into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Classify a bearing in degrees into a compass octant
pub fn resolve_octant(degrees: f64) -> Octant {
    let bearing = normalize_degrees(degrees);

    if bearing < NORTH_END {
        Octant::N
    } else if bearing < EAST_END {
        Octant::E
    } else if bearing < SOUTH_END {
        Octant::S
    } else if bearing < WEST_END {
        Octant::W
    } else {
        Octant::N
    }
}
