//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the raycasting math and player simulation.
//! It has **zero dependencies** on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: same pose and map always produce the same projection
//! - **Testable**: every numerical boundary is covered by unit tests
//! - **Portable**: can drive a terminal, a GUI, or a headless benchmark
//!
//! # Module Structure
//!
//! - [`map`]: fixed W×H tile grid, row-major, with the default level
//! - [`raycast`]: fixed-step ray marching with out-of-bounds saturation
//! - [`shade`]: ordered threshold tables mapping distance/row to bands
//! - [`projection`]: column → ray angle → ceiling/floor split
//! - [`player`]: pose, angle normalization, and the input mapper
//! - [`heading`]: 8-octant compass lookup for the player marker
//! - [`rng`]: LCG used for the starfield
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{cast_ray, GameMap, RayParams};
//!
//! let map = GameMap::open_room(16, 16);
//! let ray = cast_ray(8.0, 8.0, 0.0, &map, RayParams::default());
//! assert!(ray.hit);
//! assert!((ray.distance - 7.0).abs() <= 0.11);
//! ```

pub mod heading;
pub mod map;
pub mod player;
pub mod projection;
pub mod raycast;
pub mod rng;
pub mod shade;

pub use tui_raycast_types as types;

// Re-export commonly used types for convenience
pub use heading::{heading_for, heading_for_degrees};
pub use map::{GameMap, MapError, DEFAULT_LAYOUT};
pub use player::{normalize_angle, Control, InputMapper, PlayerState};
pub use projection::{column_angle, project_column, wall_span, Camera, ColumnProjection};
pub use raycast::{cast_ray, RayParams, RayResult};
pub use rng::SimpleRng;
pub use shade::{floor_band, floor_position, select_band, wall_band, wall_table, Cutpoint};
