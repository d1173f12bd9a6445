//! Runtime configuration, read from environment variables.

use crate::core::{InputMapper, PlayerState, RayParams};
use crate::term::Overlays;
use crate::types::{
    FIELD_OF_VIEW, MAX_DEPTH, MOVE_RATE, RAY_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS,
    TURN_RATE,
};

/// Everything the loop needs to know before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    pub fov: f64,
    pub max_depth: f64,
    pub ray_step: f64,
    pub turn_rate: f64,
    pub move_rate: f64,
    /// `None` disables the frame-rate cap.
    pub target_fps: Option<f64>,
    /// Skip presenting a frame identical to the previous one.
    pub skip_unchanged: bool,
    pub collision: bool,
    pub minimap: bool,
    pub star_seed: u32,
    pub start: PlayerState,
    pub log_path: Option<String>,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fov: FIELD_OF_VIEW,
            max_depth: MAX_DEPTH,
            ray_step: RAY_STEP,
            turn_rate: TURN_RATE,
            move_rate: MOVE_RATE,
            target_fps: Some(TARGET_FPS),
            skip_unchanged: true,
            collision: false,
            minimap: true,
            star_seed: 1,
            start: PlayerState::default(),
            log_path: None,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl RaycastConfig {
    /// Create from `RAYCAST_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. Unset or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let num = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok());
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|s| parse_bool(&s))
                .unwrap_or(default)
        };

        let target_fps = match num("RAYCAST_FPS") {
            Some(fps) if fps > 0.0 => Some(fps),
            Some(_) => None,
            None => d.target_fps,
        };

        let log_path = lookup("RAYCAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            screen_width: lookup("RAYCAST_WIDTH")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(d.screen_width),
            screen_height: lookup("RAYCAST_HEIGHT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(d.screen_height),
            fov: num("RAYCAST_FOV").unwrap_or(d.fov),
            max_depth: num("RAYCAST_MAX_DEPTH").unwrap_or(d.max_depth),
            ray_step: num("RAYCAST_STEP").unwrap_or(d.ray_step),
            turn_rate: num("RAYCAST_TURN_RATE").unwrap_or(d.turn_rate),
            move_rate: num("RAYCAST_MOVE_RATE").unwrap_or(d.move_rate),
            target_fps,
            skip_unchanged: flag("RAYCAST_SKIP_UNCHANGED", d.skip_unchanged),
            collision: flag("RAYCAST_COLLISION", d.collision),
            minimap: flag("RAYCAST_MINIMAP", d.minimap),
            star_seed: lookup("RAYCAST_SEED")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(d.star_seed),
            start: d.start,
            log_path,
        }
        .sanitized()
    }

    /// Replace degenerate values with defaults.
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.screen_width = self.screen_width.max(1);
        self.screen_height = self.screen_height.max(1);
        if !(self.fov > 0.0 && self.fov.is_finite()) {
            self.fov = d.fov;
        }
        if !(self.max_depth > 0.0 && self.max_depth.is_finite()) {
            self.max_depth = d.max_depth;
        }
        if !(self.ray_step > 0.0 && self.ray_step.is_finite()) {
            self.ray_step = d.ray_step;
        }
        if !self.turn_rate.is_finite() {
            self.turn_rate = d.turn_rate;
        }
        if !self.move_rate.is_finite() {
            self.move_rate = d.move_rate;
        }
        if matches!(self.target_fps, Some(fps) if !fps.is_finite()) {
            self.target_fps = d.target_fps;
        }
        self
    }

    pub fn ray_params(&self) -> RayParams {
        RayParams::new(self.max_depth, self.ray_step)
    }

    pub fn input_mapper(&self) -> InputMapper {
        InputMapper::new(self.turn_rate, self.move_rate).with_collision(self.collision)
    }

    pub fn overlays(&self) -> Overlays {
        Overlays {
            minimap: self.minimap,
            marker: self.minimap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(RaycastConfig::from_lookup(|_| None), RaycastConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = RaycastConfig::from_lookup(lookup(&[
            ("RAYCAST_WIDTH", "80"),
            ("RAYCAST_HEIGHT", " 24 "),
            ("RAYCAST_STEP", "0.05"),
            ("RAYCAST_COLLISION", "yes"),
            ("RAYCAST_SKIP_UNCHANGED", "off"),
            ("RAYCAST_MINIMAP", "FALSE"),
            ("RAYCAST_SEED", "99"),
            ("RAYCAST_LOG_PATH", "/tmp/raycast.log"),
        ]));
        assert_eq!((cfg.screen_width, cfg.screen_height), (80, 24));
        assert_eq!(cfg.ray_step, 0.05);
        assert!(cfg.collision);
        assert!(!cfg.skip_unchanged);
        assert!(!cfg.minimap);
        assert_eq!(cfg.star_seed, 99);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/raycast.log"));
    }

    #[test]
    fn zero_fps_disables_cap() {
        let cfg = RaycastConfig::from_lookup(lookup(&[("RAYCAST_FPS", "0")]));
        assert_eq!(cfg.target_fps, None);
        let cfg = RaycastConfig::from_lookup(lookup(&[("RAYCAST_FPS", "30")]));
        assert_eq!(cfg.target_fps, Some(30.0));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = RaycastConfig::from_lookup(lookup(&[
            ("RAYCAST_STEP", "-1"),
            ("RAYCAST_MAX_DEPTH", "nope"),
            ("RAYCAST_WIDTH", "0"),
            ("RAYCAST_COLLISION", "maybe"),
            ("RAYCAST_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.ray_step, RAY_STEP);
        assert_eq!(cfg.max_depth, MAX_DEPTH);
        assert_eq!(cfg.screen_width, 1);
        assert!(!cfg.collision);
        assert_eq!(cfg.log_path, None);
    }
}
