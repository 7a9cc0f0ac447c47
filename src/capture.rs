//! Engine child management for the capture side.
//!
//! The capture process owns the keyboard; the engine child owns the game.
//! The only link between them is the child's stdin pipe carrying single
//! command bytes.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command as ProcessCommand, Stdio};

use anyhow::{Context, Result};

use crate::types::Command;

/// Name of the engine binary, expected next to the capture binary.
pub const ENGINE_BIN: &str = "blockfall-engine";

pub struct EngineChild {
    child: Child,
    stdin: ChildStdin,
}

impl EngineChild {
    /// Spawn the engine with a piped stdin; its stdout and stderr stay on
    /// the shared terminal so it can draw.
    pub fn spawn() -> Result<Self> {
        let path = engine_binary_path();
        let mut child = ProcessCommand::new(&path)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn game engine `{}`", path.display()))?;
        let stdin = child
            .stdin
            .take()
            .context("engine child was spawned without a stdin pipe")?;
        Ok(Self { child, stdin })
    }

    /// Forward one command byte, flushed immediately. One write corresponds
    /// to exactly one command on the engine side.
    pub fn send(&mut self, command: Command) -> io::Result<()> {
        self.stdin.write_all(&[command.as_byte()])?;
        self.stdin.flush()
    }

    /// Terminate the engine and reap it.
    pub fn kill(&mut self) -> io::Result<()> {
        self.child.kill()?;
        self.child.wait()?;
        Ok(())
    }
}

/// Locate the engine binary: next to the current executable, with a PATH
/// lookup as fallback.
fn engine_binary_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ENGINE_BIN)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(ENGINE_BIN))
}
