//! Per-column projection math.
//!
//! Turns a screen column into a ray angle, casts it, and computes the
//! ceiling/floor split rows used to draw a flat wall slab.

use crate::map::GameMap;
use crate::raycast::{cast_ray, RayParams, RayResult};
use crate::types::MIN_PROJECTION_DISTANCE;

/// Camera settings for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub fov: f64,
}

/// Projection of a single screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProjection {
    pub ray_angle: f64,
    pub ray: RayResult,
    /// Rows strictly above this are sky.
    pub ceiling: f64,
    /// Rows past this are floor.
    pub floor: f64,
}

impl ColumnProjection {
    /// Whether row `y` belongs to the wall slab.
    #[inline]
    pub fn is_wall_row(&self, y: f64) -> bool {
        self.ceiling <= y && y <= self.floor
    }
}

/// Ray angle for screen column `x` of `screen_width`.
pub fn column_angle(x: u16, screen_width: u16, player_angle: f64, fov: f64) -> f64 {
    let width = f64::from(screen_width.max(1));
    (player_angle - fov / 2.0) + (f64::from(x) / width) * fov
}

/// Ceiling and floor rows for a wall at `distance`.
///
/// Distances below [`MIN_PROJECTION_DISTANCE`] are clamped before the divide.
pub fn wall_span(distance: f64, screen_height: u16) -> (f64, f64) {
    let h = f64::from(screen_height);
    let d = if distance.is_nan() {
        MIN_PROJECTION_DISTANCE
    } else {
        distance.max(MIN_PROJECTION_DISTANCE)
    };
    let ceiling = h / 2.0 - h / d;
    (ceiling, h - ceiling)
}

pub fn project_column(
    x: u16,
    screen_width: u16,
    screen_height: u16,
    camera: &Camera,
    map: &GameMap,
    params: RayParams,
) -> ColumnProjection {
    let ray_angle = column_angle(x, screen_width, camera.angle, camera.fov);
    let ray = cast_ray(camera.x, camera.y, ray_angle, map, params);
    let (ceiling, floor) = wall_span(ray.distance, screen_height);
    ColumnProjection {
        ray_angle,
        ray,
        ceiling,
        floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_center_column_looks_straight_ahead() {
        let a = column_angle(60, 120, 0.0, PI / 4.0);
        assert!(a.abs() < 1e-12);
        let left = column_angle(0, 120, 0.0, PI / 4.0);
        assert!((left + PI / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_is_finite() {
        let (c, f) = wall_span(0.0, 40);
        assert!(c.is_finite() && f.is_finite());
        assert!(c < 0.0 && f > 40.0);
        let (c, _) = wall_span(f64::NAN, 40);
        assert!(c.is_finite());
    }

    #[test]
    fn test_span_is_symmetric_about_horizon() {
        let (c, f) = wall_span(4.0, 40);
        assert_eq!(c, 10.0);
        assert_eq!(f, 30.0);
    }

    #[test]
    fn test_far_wall_span_collapses_toward_horizon() {
        let (c, f) = wall_span(16.0, 40);
        assert_eq!(c, 17.5);
        assert_eq!(f, 22.5);
    }

    #[test]
    fn test_project_center_column() {
        let map = GameMap::open_room(16, 16);
        let cam = Camera {
            x: 8.0,
            y: 8.0,
            angle: 0.0,
            fov: PI / 4.0,
        };
        let p = project_column(60, 120, 40, &cam, &map, RayParams::default());
        assert!(p.ray.hit);
        assert!((p.ray.distance - 7.0).abs() <= 0.1 + 1e-9);
        assert!(p.is_wall_row(20.0));
        assert!(!p.is_wall_row(0.0));
    }
}
