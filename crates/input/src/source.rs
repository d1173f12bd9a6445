//! Non-blocking key sources.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::key_byte;

/// Something the game loop can ask for at most one pending key per frame.
///
/// Implementations must return immediately. A failed read is reported as
/// "no key", never as an error.
pub trait KeySource {
    fn poll_key(&mut self) -> Option<u8>;
}

/// Reads keys from the terminal via crossterm without blocking.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self) -> Option<u8> {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                tracing::debug!(error = %err, "key poll failed; treating as no input");
                return None;
            }
        }

        match event::read() {
            // Terminals without key-release support only report Press.
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key_byte(key),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "key read failed; treating as no input");
                None
            }
        }
    }
}

/// A fixed script of per-frame keys, for tests and demos.
///
/// Each poll consumes one entry; once exhausted every poll yields `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    frames: VecDeque<Option<u8>>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = Option<u8>>>(frames: I) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<u8> {
        self.frames.pop_front().flatten()
    }
}
