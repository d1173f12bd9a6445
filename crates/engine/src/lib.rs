//! Game loop module.
//!
//! Drives timing, input, simulation, composition, and the diff-based redraw
//! against the [`Display`](crate::term::Display) and
//! [`KeySource`](crate::input::KeySource) collaborators. Everything runs on
//! a single thread; the only suspension point is the end-of-frame sleep.
//!
//! # Environment Variables
//!
//! See [`RaycastConfig::from_env`]: `RAYCAST_WIDTH`, `RAYCAST_HEIGHT`,
//! `RAYCAST_FOV`, `RAYCAST_MAX_DEPTH`, `RAYCAST_STEP`, `RAYCAST_TURN_RATE`,
//! `RAYCAST_MOVE_RATE`, `RAYCAST_FPS`, `RAYCAST_SKIP_UNCHANGED`,
//! `RAYCAST_COLLISION`, `RAYCAST_MINIMAP`, `RAYCAST_SEED`, `RAYCAST_LOG_PATH`.

pub mod config;
pub mod game_loop;
pub mod pacer;

pub use tui_raycast_core as core;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;

pub use config::RaycastConfig;
pub use game_loop::{status_lines, GameLoop, LoopState, LoopStats, SimContext};
pub use pacer::{instantaneous_fps, FramePacer};
