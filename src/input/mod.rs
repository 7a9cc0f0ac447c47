//! Input module: maps terminal key events to wire commands.

pub mod map;

pub use map::{map_key_event, should_quit};
