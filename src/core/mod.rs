//! Core module - pure game logic with no external dependencies
//!
//! This module contains the frame grid and the block state machine.
//! It has zero dependencies on UI, processes, or I/O.

pub mod frame;
pub mod game_state;

// Re-export commonly used types
pub use frame::Frame;
pub use game_state::{Block, GameState};
