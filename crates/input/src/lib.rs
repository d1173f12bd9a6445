//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the raw key bytes the simulation consumes and
//! exposes them through a non-blocking [`KeySource`].

pub mod map;
pub mod source;

pub use tui_raycast_types as types;

pub use map::key_byte;
pub use source::{CrosstermKeys, KeySource, ScriptedKeys};
