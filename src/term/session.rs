//! RawTerminal: puts the terminal into raw mode for key capture and restores
//! it afterwards.
//!
//! One key press yields one event with no line buffering and no echo. The
//! guard restores the terminal on drop as well, so a panic in the capture
//! loop does not leave the shell unusable.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    QueueableCommand,
};

pub struct RawTerminal {
    stdout: io::Stdout,
    raw: bool,
}

impl RawTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    /// Wipe the screen and park the cursor at the origin.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for RawTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
