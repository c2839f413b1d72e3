use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Sink for finished frames.
pub trait Renderer {
    /// Prepares the output before the first frame.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Shows one complete frame.
    fn present(&mut self, frame: &str) -> Result<()>;
}

/// Draws frames over each other on an ANSI terminal.
///
/// The screen is cleared once; each frame then starts with a cursor-home
/// sequence and is flushed as a single write.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)).context("clearing screen")?;
        self.out.flush().context("clearing screen")
    }

    fn present(&mut self, frame: &str) -> Result<()> {
        queue!(self.out, MoveTo(0, 0)).context("moving cursor home")?;
        self.out
            .write_all(frame.as_bytes())
            .context("writing frame")?;
        self.out.flush().context("writing frame")
    }
}
