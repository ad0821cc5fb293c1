//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Redraws only the rows that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
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

    /// Force the next draw to be a full redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        encode_row_into(fb.row(y), y, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the rows that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in changed_rows(prev, next) {
        encode_row_into(next.row(y), y, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Rows whose cells differ; every row when the sizes differ.
pub fn changed_rows(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<u16> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    (0..next.height())
        .filter(|&y| !same_size || prev.row(y) != next.row(y))
        .collect()
}

fn encode_row_into(row: &[Cell], y: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    let mut current: Option<Tone> = None;
    for cell in row {
        if current != Some(cell.tone) {
            out.queue(SetForegroundColor(tone_color(cell.tone)))?;
            current = Some(cell.tone);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Rgb { r: 220, g: 220, b: 220 },
        Tone::Dim => Color::Rgb { r: 80, g: 80, b: 90 },
        Tone::Border => Color::Rgb { r: 200, g: 200, b: 200 },
        Tone::Head => Color::Rgb { r: 120, g: 230, b: 120 },
        Tone::Tail => Color::Rgb { r: 60, g: 170, b: 60 },
        Tone::Fruit => Color::Rgb { r: 230, g: 70, b: 70 },
        Tone::Alert => Color::Rgb { r: 240, g: 200, b: 60 },
    }
}
