//! Key mapping from terminal events to game commands.
//!
//! The wire alphabet is the four canonical bytes; arrow keys and uppercase
//! variants collapse onto them before anything is written to the pipe.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveDown),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Rotate),
        _ => None,
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(Command::MoveDown)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Rotate)
        );
    }

    #[test]
    fn test_arrow_and_uppercase_aliases() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::MoveDown)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::Rotate)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(Command::Rotate)
        );
    }

    #[test]
    fn test_unrelated_keys_are_discarded() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), None);
        // Quit is not a wire command.
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
