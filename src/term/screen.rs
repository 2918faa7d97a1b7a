//! Screen: flushes rendered frames to a real terminal
//!
//! Owns raw mode and the alternate screen. Frames are small (one game
//! board plus a side panel), so every draw is a full redraw encoded into
//! one buffered write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Frame, Glyph, Rgb};

pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Encode and flush one full frame.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a frame as crossterm commands without touching stdout.
fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<(Rgb, bool)> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..frame.width() {
            let glyph = frame.get(x, y).unwrap_or_default();
            if current != Some((glyph.fg, glyph.bold)) {
                apply_style_into(out, glyph)?;
                current = Some((glyph.fg, glyph.bold));
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: glyph.fg.r,
        g: glyph.fg.g,
        b: glyph.fg.b,
    }))?;
    if glyph.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}
