//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Output is queued into an in-memory buffer and written in one go on
//! [`Display::flush`]. When the caller hands over the previously presented
//! frame, only the changed runs are encoded.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::display::Display;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Bg, Fg};

/// Writes frames to a terminal. `W` is stdout outside of tests.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    raw: bool,
    cursor_hidden: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            raw: false,
            cursor_hidden: false,
        }
    }

    /// Write out queued bytes. The queue is emptied even when the write fails.
    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let written = self.out.write_all(&self.buf).and_then(|_| self.out.flush());
        self.buf.clear();
        written?;
        Ok(())
    }
}

impl<W: Write> Display for TerminalRenderer<W> {
    fn present(&mut self, fb: &FrameBuffer, previous: Option<&FrameBuffer>) -> Result<()> {
        match previous {
            Some(prev) => encode_diff_into(prev, fb, &mut self.buf),
            None => encode_full_into(fb, &mut self.buf),
        }
    }

    fn set_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.buf.queue(cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
    }

    fn enter_raw_mode(&mut self) -> Result<()> {
        if self.raw {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    fn restore_mode(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();

        // Raw mode is dropped even if the screen could not be written.
        let disabled = terminal::disable_raw_mode();
        self.raw = false;
        flushed?;
        disabled?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        if self.cursor_hidden {
            return Ok(());
        }
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        self.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        if !self.cursor_hidden {
            return Ok(());
        }
        self.buf.queue(cursor::Show)?;
        self.cursor_hidden = false;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(fg_color(style.fg)))?;
    out.queue(SetBackgroundColor(bg_color(style.bg)))?;
    Ok(())
}

fn fg_color(fg: Fg) -> Color {
    match fg {
        Fg::Default => Color::Reset,
        Fg::Gray => Color::Grey,
        Fg::DarkGray => Color::DarkGrey,
        Fg::Black => Color::Black,
        Fg::Red => Color::DarkRed,
        Fg::White => Color::White,
    }
}

fn bg_color(bg: Bg) -> Color {
    match bg {
        Bg::Default => Color::Reset,
        Bg::Black => Color::Black,
        Bg::DarkGray => Color::DarkGrey,
        Bg::White => Color::White,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
