//! The display collaborator and its scoped terminal session.
//!
//! The game loop only ever talks to a [`Display`]. [`TerminalGuard`] acquires
//! raw mode and a hidden cursor on entry and releases both when dropped, so
//! the terminal is restored on every exit path, including unwinding panics.

use std::ops::{Deref, DerefMut};

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Narrow interface to whatever shows frames to the user.
///
/// Mode and cursor operations must be idempotent: calling one twice, or
/// calling a release without the matching acquire, is a no-op.
pub trait Display {
    /// Show `fb` starting at the home position. `previous` is the frame
    /// currently on screen, if the caller knows it; only the cells that
    /// differ from it need to be redrawn.
    fn present(&mut self, fb: &FrameBuffer, previous: Option<&FrameBuffer>) -> Result<()>;

    fn set_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    /// Write text at the cursor, clearing the rest of the row. The cursor is
    /// left on the same row, so writing on the last row never scrolls.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Push any queued output to the device.
    fn flush(&mut self) -> Result<()>;

    fn enter_raw_mode(&mut self) -> Result<()>;
    fn restore_mode(&mut self) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
}

/// Raw mode + hidden cursor for as long as the guard lives.
pub struct TerminalGuard<D: Display> {
    display: D,
}

impl<D: Display> TerminalGuard<D> {
    /// Acquire the terminal. On failure anything already acquired is
    /// released before the error is returned.
    pub fn acquire(mut display: D) -> Result<Self> {
        if let Err(err) = display.enter_raw_mode().and_then(|_| display.hide_cursor()) {
            release(&mut display);
            return Err(err);
        }
        Ok(Self { display })
    }

    pub fn display(&mut self) -> &mut D {
        &mut self.display
    }
}

fn release<D: Display>(display: &mut D) {
    // Best effort: each step runs even if the previous one failed.
    let _ = display.show_cursor();
    let _ = display.restore_mode();
    let _ = display.flush();
}

impl<D: Display> Deref for TerminalGuard<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.display
    }
}

impl<D: Display> DerefMut for TerminalGuard<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<D: Display> Drop for TerminalGuard<D> {
    fn drop(&mut self) {
        release(&mut self.display);
    }
}
