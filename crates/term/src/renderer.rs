//! TerminalRenderer: flushes maze frames and screen clears to a terminal.
//!
//! Commands are encoded into a reusable byte buffer first and written in one
//! go, so a frame either lands whole or not at all from the reader's point of
//! view. The writer is generic so the exact byte stream can be checked in tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, QueueableCommand};

use crate::fb::FrameBuffer;
use crate::game_view::Viewport;
use crate::types::Outcome;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    viewport: Viewport,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(viewport: Viewport) -> Self {
        Self::new(io::stdout(), viewport)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            viewport,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Blank every visible terminal cell, leaving the cursor where it was.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(self.viewport, &mut self.buf)?;
        self.flush_buf()
    }

    /// Paint a frame from the top-left corner without scrolling.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    /// Clear the screen, home the cursor and print the end-of-game banner.
    pub fn finish(&mut self, outcome: Outcome) -> Result<()> {
        self.buf.clear();
        encode_clear_into(self.viewport, &mut self.buf)?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(Print(outcome.banner()))?;
        // Raw mode disables output post-processing, so return the carriage too.
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-screen blanking pass into `out`.
pub fn encode_clear_into(viewport: Viewport, out: &mut Vec<u8>) -> Result<()> {
    let blank = " ".repeat(viewport.width as usize);
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(cursor::SavePosition)?;
    for y in 0..viewport.height {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(Print(&blank))?;
    }
    out.queue(cursor::RestorePosition)?;
    Ok(())
}

/// Encode a frame redraw into `out`.
///
/// Each row is positioned explicitly, so nothing is ever written past the
/// last frame row and the terminal does not scroll.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::SavePosition)?;
    let mut line = String::with_capacity(fb.width() as usize);
    for y in 0..fb.height() {
        line.clear();
        line.extend(fb.row(y));
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(Print(&line))?;
    }
    out.queue(cursor::RestorePosition)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QUIT_MESSAGE, WIN_MESSAGE};

    const SAVE: &str = "\x1b7";
    const RESTORE: &str = "\x1b8";

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn frame_is_bracketed_by_cursor_save_restore() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, 'H');
        fb.set(2, 1, 'X');

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let s = text(&out);

        assert!(s.starts_with(SAVE));
        assert!(s.ends_with(RESTORE));
        assert!(s.contains("H  "));
        assert!(s.contains("  X"));
        assert!(!s.contains('\n'));
    }

    #[test]
    fn clear_blanks_the_whole_viewport() {
        let vp = Viewport::new(7, 4);
        let mut out = Vec::new();
        encode_clear_into(vp, &mut out).unwrap();
        let s = text(&out);

        assert_eq!(s.matches("       ").count(), 4);
        assert!(s.contains(SAVE));
        assert!(s.ends_with(RESTORE));
    }

    #[test]
    fn finish_prints_exactly_one_banner() {
        let mut won = TerminalRenderer::new(Vec::new(), Viewport::new(10, 3));
        won.finish(Outcome::Won).unwrap();
        let s = text(won.writer());
        assert!(s.contains(WIN_MESSAGE));
        assert!(!s.contains(QUIT_MESSAGE));
        assert!(s.ends_with("\r\n"));

        let mut quit = TerminalRenderer::new(Vec::new(), Viewport::new(10, 3));
        quit.finish(Outcome::Quit).unwrap();
        let s = text(&quit.into_inner());
        assert!(s.contains(QUIT_MESSAGE));
        assert!(!s.contains(WIN_MESSAGE));
    }
}
