//! Engine event loop.
//!
//! Two event sources converge on the single `GameState`: a 1-second gravity
//! interval and command bytes arriving on stdin. A dedicated reader task
//! decodes bytes into commands and forwards them over a bounded channel; the
//! loop dispatches whichever source fires first, runs the handler to
//! completion, then renders. "One event handled to completion before the
//! next is dispatched" is the entire synchronization story.

use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::core::GameState;
use crate::term::FrameRenderer;
use crate::types::{Command, GRAVITY_TICK_MS, MAX_PENDING_COMMANDS};

/// One unit of work for the dispatch seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    Gravity,
    Input(Command),
}

/// Apply one event to the state.
///
/// Returns true when a gravity step ran with it, i.e. the 1-second countdown
/// must restart.
pub fn dispatch(state: &mut GameState, event: EngineEvent) -> bool {
    match event {
        EngineEvent::Gravity => {
            state.gravity_tick();
            true
        }
        EngineEvent::Input(command) => state.handle_command(command),
    }
}

/// Run the engine until the process is killed.
///
/// Nothing in here is fatal: render and read failures are logged and the
/// loop keeps going, and a closed pipe leaves gravity running alone.
pub async fn run() {
    let (command_tx, command_rx) = mpsc::channel(MAX_PENDING_COMMANDS);
    tokio::spawn(read_commands(command_tx));

    let mut state = GameState::new();
    let mut renderer = FrameRenderer::new();
    event_loop(&mut state, &mut renderer, command_rx).await;
}

async fn event_loop(
    state: &mut GameState,
    renderer: &mut FrameRenderer,
    mut commands: mpsc::Receiver<Command>,
) {
    let mut gravity = time::interval(Duration::from_millis(GRAVITY_TICK_MS as u64));
    // A tick elapsing while a handler runs is delayed, never replayed.
    gravity.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The opening frame is border-only; the first interval tick completes
    // immediately and performs the initial descent.
    draw(renderer, state);

    let mut input_open = true;
    loop {
        tokio::select! {
            // Biased so the immediate startup tick precedes any queued input.
            biased;
            _ = gravity.tick() => {
                dispatch(state, EngineEvent::Gravity);
            }
            command = commands.recv(), if input_open => match command {
                Some(command) => {
                    if dispatch(state, EngineEvent::Input(command)) {
                        gravity.reset();
                    }
                }
                None => {
                    // Capture side is gone; gravity keeps the game falling
                    // until this process is killed.
                    input_open = false;
                }
            }
        }

        draw(renderer, state);
    }
}

fn draw(renderer: &mut FrameRenderer, state: &GameState) {
    if let Err(err) = renderer.draw(state.frame()) {
        eprintln!("[engine] render failed: {err:#}");
    }
}

/// Pull single bytes off stdin, decode, and forward.
///
/// Reading exactly one byte per arriving command keeps the channel in
/// lockstep with the pipe.
async fn read_commands(commands: mpsc::Sender<Command>) {
    let mut stdin = tokio::io::stdin();
    let mut buf = [0u8; 1];
    loop {
        match stdin.read(&mut buf).await {
            // Pipe closed by the capture side.
            Ok(0) => break,
            Ok(_) => {
                if let Some(command) = Command::from_byte(buf[0]) {
                    if commands.send(command).await.is_err() {
                        break;
                    }
                }
            }
            Err(err) => {
                eprintln!("[engine] stdin read failed: {err}");
            }
        }
    }
}
