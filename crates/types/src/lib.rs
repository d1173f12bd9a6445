//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Default Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | Columns in the 3D view (one ray per column) |
//! | `SCREEN_HEIGHT` | 40 | Rows in the 3D view |
//! | `FIELD_OF_VIEW` | π/4 | Horizontal field of view in radians |
//! | `MAX_DEPTH` | 16.0 | Ray marching cap, also the out-of-bounds saturation value |
//! | `RAY_STEP` | 0.1 | Fixed ray marching increment in map units |
//! | `TURN_RATE` | 2.0 | Radians per second |
//! | `MOVE_RATE` | 5.0 | Map units per second |
//!
//! # Examples
//!
//! ```
//! use tui_raycast_types::{CellKind, PlayerAction, WallBand};
//!
//! assert_eq!(CellKind::from_glyph('#'), Some(CellKind::Wall));
//! assert_eq!(PlayerAction::from_key(b'w'), Some(PlayerAction::MoveForward));
//! assert_eq!(WallBand::Near.glyph(), '█');
//! ```

/// Default view width in terminal columns.
pub const SCREEN_WIDTH: u16 = 120;

/// Default view height in terminal rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Default horizontal field of view (radians).
pub const FIELD_OF_VIEW: f64 = std::f64::consts::PI / 4.0;

/// Default marching cap in map units.
pub const MAX_DEPTH: f64 = 16.0;

/// Default marching increment in map units.
pub const RAY_STEP: f64 = 0.1;

/// Default turn rate (radians per second).
pub const TURN_RATE: f64 = 2.0;

/// Default move rate (map units per second).
pub const MOVE_RATE: f64 = 5.0;

/// Default frame-rate cap.
pub const TARGET_FPS: f64 = 60.0;

/// Smallest distance used in the projection divide.
pub const MIN_PROJECTION_DISTANCE: f64 = 1e-3;

/// Raw byte for Ctrl+C as delivered by a terminal in raw mode.
pub const KEY_ETX: u8 = 0x03;

/// Kind of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
}

impl CellKind {
    /// Parse a layout glyph (`#` wall, `.` or space open).
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellKind::Wall),
            '.' | ' ' => Some(CellKind::Open),
            _ => None,
        }
    }

    /// Raw glyph used by the minimap.
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
        }
    }
}

/// Discrete player input decoded from a key byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
    Quit,
}

impl PlayerAction {
    /// Decode a raw key byte. Unrecognized bytes map to `None`.
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'a' | b'A' => Some(PlayerAction::TurnLeft),
            b'd' | b'D' => Some(PlayerAction::TurnRight),
            b'w' | b'W' => Some(PlayerAction::MoveForward),
            b's' | b'S' => Some(PlayerAction::MoveBackward),
            b'q' | b'Q' | KEY_ETX => Some(PlayerAction::Quit),
            _ => None,
        }
    }
}

/// Wall shading tier selected by distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallBand {
    Near,
    Mid,
    Far,
    VeryFar,
    None,
}

impl WallBand {
    pub fn glyph(&self) -> char {
        match self {
            WallBand::Near => '█',
            WallBand::Mid => '▓',
            WallBand::Far => '▒',
            WallBand::VeryFar => '░',
            WallBand::None => ' ',
        }
    }
}

/// Floor shading tier selected by normalized row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorBand {
    VeryNear,
    Near,
    Mid,
    Far,
}

impl FloorBand {
    pub fn glyph(&self) -> char {
        match self {
            FloorBand::VeryNear | FloorBand::Near => '░',
            FloorBand::Mid => '▒',
            FloorBand::Far => '▓',
        }
    }
}

/// Compass heading used for the player marker.
///
/// `θ = 0` points along +y, which is "down" on screen, so it reads as south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
}

impl Heading {
    pub fn glyph(&self) -> char {
        match self {
            Heading::South => '↓',
            Heading::SouthEast => '↘',
            Heading::East => '→',
            Heading::NorthEast => '↗',
            Heading::North => '↑',
            Heading::NorthWest => '↖',
            Heading::West => '←',
            Heading::SouthWest => '↙',
        }
    }
}

/// Foreground palette understood by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fg {
    #[default]
    Default,
    Gray,
    DarkGray,
    Black,
    Red,
    White,
}

/// Background palette understood by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bg {
    #[default]
    Default,
    Black,
    DarkGray,
    White,
}
