//! Key mapping from terminal events to host actions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    /// Forward a command to the running game
    Command(Command),
    /// Start a game if none is running, otherwise toggle pause
    PlayPause,
    ToggleMute,
    /// Start a new game (only from idle or game over)
    Restart,
}

/// Map keyboard input to host actions. Unmapped keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<HostAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(HostAction::Command(Command::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(HostAction::Command(Command::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(HostAction::Command(Command::Down))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(HostAction::Command(Command::Rotate))
        }

        // Lifecycle
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(HostAction::PlayPause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostAction::Restart),

        KeyCode::Char('m') | KeyCode::Char('M') => Some(HostAction::ToggleMute),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
