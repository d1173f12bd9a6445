//! Terminal presentation layer.
//!
//! Renders the first-person scene into a simple framebuffer and flushes it to
//! a terminal backend through the [`Display`] trait. The compositor is pure;
//! only [`TerminalRenderer`] touches the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make every frame a plain value that can be compared cell-for-cell
//! - Restore the terminal on every exit path via [`TerminalGuard`]

pub mod display;
pub mod fb;
pub mod renderer;
pub mod scene;
pub mod starfield;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use display::{Display, TerminalGuard};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{floor_cell, wall_cell, Overlays, SceneView, Viewport};
pub use starfield::{Starfield, SKY_STYLE};
