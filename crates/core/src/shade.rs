//! Shader - distance and row position to discrete shading bands
//!
//! Bands are chosen from small ordered cutpoint tables. Each table is scanned
//! in order and the first cutpoint that admits the value wins; values past the
//! last cutpoint fall through to the table's fallback band.

use crate::types::{FloorBand, WallBand};

/// One entry of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutpoint<B> {
    pub limit: f64,
    /// `true` admits `value <= limit`, `false` admits `value < limit`.
    pub inclusive: bool,
    pub band: B,
}

impl<B: Copy> Cutpoint<B> {
    const fn below(limit: f64, band: B) -> Self {
        Self {
            limit,
            inclusive: false,
            band,
        }
    }

    const fn at_most(limit: f64, band: B) -> Self {
        Self {
            limit,
            inclusive: true,
            band,
        }
    }

    #[inline]
    fn admits(&self, value: f64) -> bool {
        if self.inclusive {
            value <= self.limit
        } else {
            value < self.limit
        }
    }
}

/// Scan an ordered table; `fallback` when no cutpoint admits `value`.
pub fn select_band<B: Copy>(value: f64, table: &[Cutpoint<B>], fallback: B) -> B {
    table
        .iter()
        .find(|c| c.admits(value))
        .map(|c| c.band)
        .unwrap_or(fallback)
}

/// Wall cutpoints for a given depth cap: `max_depth / 4`, `/ 3`, `/ 2`, `/ 1`.
pub fn wall_table(max_depth: f64) -> [Cutpoint<WallBand>; 4] {
    [
        Cutpoint::at_most(max_depth / 4.0, WallBand::Near),
        Cutpoint::below(max_depth / 3.0, WallBand::Mid),
        Cutpoint::below(max_depth / 2.0, WallBand::Far),
        Cutpoint::below(max_depth, WallBand::VeryFar),
    ]
}

const FLOOR_TABLE: [Cutpoint<FloorBand>; 3] = [
    Cutpoint::below(0.25, FloorBand::VeryNear),
    Cutpoint::below(0.5, FloorBand::Near),
    Cutpoint::below(0.75, FloorBand::Mid),
];

/// Wall band for a marched distance.
pub fn wall_band(distance: f64, max_depth: f64) -> WallBand {
    select_band(distance, &wall_table(max_depth), WallBand::None)
}

/// Floor band for a normalized row position `b`.
pub fn floor_band(b: f64) -> FloorBand {
    select_band(b, &FLOOR_TABLE, FloorBand::Far)
}

/// Normalized floor position: 1 at the horizon, decreasing toward the bottom row.
pub fn floor_position(row: f64, screen_height: f64) -> f64 {
    let half = screen_height / 2.0;
    1.0 - (row - half) / half
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: f64 = 16.0;

    #[test]
    fn test_wall_band_boundaries() {
        assert_eq!(wall_band(0.0, D), WallBand::Near);
        assert_eq!(wall_band(D / 4.0, D), WallBand::Near);
        assert_eq!(wall_band(D / 4.0 + 1e-9, D), WallBand::Mid);
        assert_eq!(wall_band(D / 3.0, D), WallBand::Far);
        assert_eq!(wall_band(D / 2.0 - 1e-9, D), WallBand::Far);
        assert_eq!(wall_band(D / 2.0, D), WallBand::VeryFar);
        assert_eq!(wall_band(D - 1e-9, D), WallBand::VeryFar);
        assert_eq!(wall_band(D, D), WallBand::None);
    }

    #[test]
    fn test_wall_band_odd_depth_thirds() {
        // 10/3 is not exactly representable; the boundary must still be exclusive.
        let d = 10.0;
        assert_eq!(wall_band(d / 3.0, d), WallBand::Far);
        assert_eq!(wall_band(d / 3.0 - 1e-9, d), WallBand::Mid);
    }

    #[test]
    fn test_floor_band_boundaries() {
        assert_eq!(floor_band(-0.5), FloorBand::VeryNear);
        assert_eq!(floor_band(0.25 - 1e-12), FloorBand::VeryNear);
        assert_eq!(floor_band(0.25), FloorBand::Near);
        assert_eq!(floor_band(0.5), FloorBand::Mid);
        assert_eq!(floor_band(0.75), FloorBand::Far);
        assert_eq!(floor_band(1.0), FloorBand::Far);
    }

    #[test]
    fn test_floor_position_is_linear() {
        assert_eq!(floor_position(20.0, 40.0), 1.0);
        assert_eq!(floor_position(40.0, 40.0), 0.0);
        assert_eq!(floor_position(30.0, 40.0), 0.5);
        assert!(floor_position(39.0, 40.0) > 0.0);
    }
}
