//! Player pose and the input mapper that integrates key presses into it.
//!
//! All deltas are scaled by the elapsed frame time so the simulation is
//! frame-rate independent. Movement is unconstrained unless collision is
//! enabled, in which case a move into a solid cell is rejected as a whole.

use std::f64::consts::TAU;

use crate::map::GameMap;
use crate::projection::Camera;
use crate::types::{CellKind, PlayerAction, MOVE_RATE, TURN_RATE};

/// Normalize an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Player position and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, kept in `[0, 2π)`.
    pub angle: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            x: 8.0,
            y: 8.0,
            angle: 0.0,
        }
    }
}

impl PlayerState {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle: normalize_angle(angle),
        }
    }

    pub fn camera(&self, fov: f64) -> Camera {
        Camera {
            x: self.x,
            y: self.y,
            angle: self.angle,
            fov,
        }
    }

    /// Cell containing the player, if inside the map's integer range.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    pub fn turned(&self, delta: f64) -> Self {
        Self {
            angle: normalize_angle(self.angle + delta),
            ..*self
        }
    }

    /// Move `distance` along the current heading (negative moves backward).
    pub fn advanced(&self, distance: f64) -> Self {
        Self {
            x: self.x + self.angle.sin() * distance,
            y: self.y + self.angle.cos() * distance,
            ..*self
        }
    }
}

/// Whether the loop should keep running after an input was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Turns discrete key events into pose deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputMapper {
    pub turn_rate: f64,
    pub move_rate: f64,
    pub collision: bool,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self {
            turn_rate: TURN_RATE,
            move_rate: MOVE_RATE,
            collision: false,
        }
    }
}

impl InputMapper {
    pub fn new(turn_rate: f64, move_rate: f64) -> Self {
        Self {
            turn_rate,
            move_rate,
            collision: false,
        }
    }

    pub fn with_collision(mut self, collision: bool) -> Self {
        self.collision = collision;
        self
    }

    /// Pure pose update for one action over `dt` seconds.
    pub fn apply(
        &self,
        action: Option<PlayerAction>,
        dt: f64,
        state: PlayerState,
        map: &GameMap,
    ) -> PlayerState {
        match action {
            Some(PlayerAction::TurnLeft) => state.turned(-self.turn_rate * dt),
            Some(PlayerAction::TurnRight) => state.turned(self.turn_rate * dt),
            Some(PlayerAction::MoveForward) => {
                self.try_move(state, state.advanced(self.move_rate * dt), map)
            }
            Some(PlayerAction::MoveBackward) => {
                self.try_move(state, state.advanced(-self.move_rate * dt), map)
            }
            Some(PlayerAction::Quit) | None => state,
        }
    }

    /// Decode a raw key byte, mutate the pose, and report whether to keep running.
    pub fn apply_key(
        &self,
        key: Option<u8>,
        dt: f64,
        state: &mut PlayerState,
        map: &GameMap,
    ) -> Control {
        let action = key.and_then(PlayerAction::from_key);
        if action == Some(PlayerAction::Quit) {
            return Control::Quit;
        }
        *state = self.apply(action, dt, *state, map);
        Control::Continue
    }

    fn try_move(&self, from: PlayerState, to: PlayerState, map: &GameMap) -> PlayerState {
        if !self.collision {
            return to;
        }
        match map.cell_at(to.x, to.y) {
            Some(CellKind::Open) => to,
            _ => from,
        }
    }
}
