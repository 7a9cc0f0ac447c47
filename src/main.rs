//! Input capture runner (default binary).
//!
//! Spawns the engine child, puts the terminal into raw mode, and forwards
//! command bytes over the child's stdin pipe. Quit kills the child, clears
//! the screen, and exits cleanly.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::capture::EngineChild;
use blockfall::input::{map_key_event, should_quit};
use blockfall::term::RawTerminal;

fn main() -> Result<()> {
    let mut term = RawTerminal::new();
    if let Err(err) = term.enter() {
        // Capture carries on in whatever mode the terminal was left in.
        eprintln!("[capture] terminal setup failed: {err:#}");
    }

    let result = run();

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        eprintln!("[capture] terminal restore failed: {err:#}");
    }
    if result.is_ok() {
        if let Err(err) = term.clear_screen() {
            eprintln!("[capture] screen clear failed: {err:#}");
        }
    }
    result
}

fn run() -> Result<()> {
    let mut engine = EngineChild::spawn()?;

    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                eprintln!("[capture] key read failed: {err}");
                continue;
            }
        };

        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if should_quit(key) {
            if let Err(err) = engine.kill() {
                eprintln!("[capture] failed to stop engine: {err}");
            }
            return Ok(());
        }

        if let Some(command) = map_key_event(key) {
            if let Err(err) = engine.send(command) {
                eprintln!("[capture] failed to forward {command:?}: {err}");
            }
        }
    }
}
