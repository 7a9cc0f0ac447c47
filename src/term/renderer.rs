//! FrameRenderer: flushes the game frame to the terminal.
//!
//! Pure side-effecting consumer of the frame; never mutates game state.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::Frame;

pub struct FrameRenderer {
    stdout: io::Stdout,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Clear the visible output and redraw every cell of the frame.
    ///
    /// The terminal is in raw mode (the capture process owns it), so each row
    /// ends with an explicit carriage return.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for row in frame.rows() {
            for cell in row {
                self.stdout.queue(Print(cell.as_char()))?;
            }
            self.stdout.queue(Print("\r\n"))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
