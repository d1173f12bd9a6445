//! Key mapping from terminal events to raw key bytes.
//!
//! The simulation consumes single bytes, the way a raw-mode terminal read
//! would deliver them. Arrow keys are folded onto the WASD bytes.

use crate::types::KEY_ETX;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key event into the byte the simulation understands.
pub fn key_byte(key: KeyEvent) -> Option<u8> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(KEY_ETX),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(b'a'),
        KeyCode::Right => Some(b'd'),
        KeyCode::Up => Some(b'w'),
        KeyCode::Down => Some(b's'),
        KeyCode::Esc => Some(b'q'),
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        _ => None,
    }
}
