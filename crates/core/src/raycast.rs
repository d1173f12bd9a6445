//! Raycaster - fixed-step ray marching through the tile grid
//!
//! A point is marched from the origin along `(sin θ, cos θ)` in increments of
//! `step` until it lands in a wall cell, leaves the map, or reaches `max_depth`.
//! Leaving the map counts as a hit but saturates the distance to `max_depth`.

use crate::map::GameMap;
use crate::types::{CellKind, MAX_DEPTH, RAY_STEP};

/// Marching parameters shared by every column of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayParams {
    pub max_depth: f64,
    pub step: f64,
}

impl Default for RayParams {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            step: RAY_STEP,
        }
    }
}

impl RayParams {
    pub fn new(max_depth: f64, step: f64) -> Self {
        Self { max_depth, step }
    }

    /// Upper bound on marching iterations: `ceil(max_depth / step)`.
    pub fn max_steps(&self) -> u32 {
        if !(self.step > 0.0) || !(self.max_depth > 0.0) {
            return 0;
        }
        (self.max_depth / self.step).ceil() as u32
    }
}

/// Outcome of casting a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    /// Distance to the wall, never above `max_depth`.
    pub distance: f64,
    /// True for a wall hit or a bounds exit.
    pub hit: bool,
    /// Marching iterations performed.
    pub steps: u32,
}

/// Cast one ray from `(px, py)` at `angle` (radians).
pub fn cast_ray(px: f64, py: f64, angle: f64, map: &GameMap, params: RayParams) -> RayResult {
    let eye_x = angle.sin();
    let eye_y = angle.cos();
    let max_steps = params.max_steps();

    // Distance is derived from the step index so it does not drift with repeated addition.
    for i in 1..=max_steps {
        let distance = (i as f64 * params.step).min(params.max_depth);
        let ray_x = (px + eye_x * distance).floor() as i64;
        let ray_y = (py + eye_y * distance).floor() as i64;

        match map.get(ray_x, ray_y) {
            None => {
                return RayResult {
                    distance: params.max_depth,
                    hit: true,
                    steps: i,
                }
            }
            Some(CellKind::Wall) => {
                return RayResult {
                    distance,
                    hit: true,
                    steps: i,
                }
            }
            Some(CellKind::Open) => {}
        }
    }

    RayResult {
        distance: params.max_depth.max(0.0),
        hit: false,
        steps: max_steps,
    }
}
