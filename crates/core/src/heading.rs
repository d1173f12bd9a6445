//! Compass octant lookup for the player marker.
//!
//! Octants are half-open `[lo, hi)` intervals in degrees, 45° wide and offset
//! by 22.5°. An angle exactly on a cutpoint belongs to the higher interval.
//! South wraps around zero: `[337.5, 360) ∪ [0, 22.5)`.

use crate::player::normalize_angle;
use crate::types::Heading;

/// Lower bound (degrees) of each octant, ascending.
const OCTANTS: [(f64, Heading); 8] = [
    (22.5, Heading::SouthEast),
    (67.5, Heading::East),
    (112.5, Heading::NorthEast),
    (157.5, Heading::North),
    (202.5, Heading::NorthWest),
    (247.5, Heading::West),
    (292.5, Heading::SouthWest),
    (337.5, Heading::South),
];

/// Octant for an angle already expressed in degrees within `[0, 360)`.
pub fn heading_for_degrees(degrees: f64) -> Heading {
    OCTANTS
        .iter()
        .rev()
        .find(|(lo, _)| degrees >= *lo)
        .map(|(_, h)| *h)
        .unwrap_or(Heading::South)
}

/// Octant for a heading in radians.
pub fn heading_for(angle: f64) -> Heading {
    let degrees = normalize_angle(angle) * 180.0 / std::f64::consts::PI;
    heading_for_degrees(degrees)
}
