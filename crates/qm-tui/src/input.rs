//! Input handling - convert key events to commands
//!
//! WASD and the arrow keys move; the remaining bindings are single letters.

use crossterm::event::{KeyCode, KeyEvent};
use qm_core::action::{Command, Direction};

/// Convert a key event to a gameplay command.
///
/// These are the bindings for normal exploration. Mode-specific keys
/// (inventory, combat prompt, death screen) are handled in app.rs.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Direction::East)),

        KeyCode::Char('.') => Some(Command::Wait),
        KeyCode::Char('e') => Some(Command::Eat),
        KeyCode::Char('x') => Some(Command::Wield),
        KeyCode::Char('o') => Some(Command::OpenChest),

        KeyCode::Char('q') => Some(Command::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_maps_to_moves() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('w'))),
            Some(Command::Move(Direction::North))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('a'))),
            Some(Command::Move(Direction::West))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Down)),
            Some(Command::Move(Direction::South))
        );
    }

    #[test]
    fn unknown_keys_map_to_nothing() {
        assert_eq!(key_to_command(key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_command(key(KeyCode::Esc)), None);
    }
}
