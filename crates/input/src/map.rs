//! Key mapping from terminal events to logical keys.

use crate::types::LogicalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a physical key to the logical key it is bound to.
pub fn key_to_logical(key: KeyEvent) -> Option<LogicalKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(LogicalKey::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(LogicalKey::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(LogicalKey::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(LogicalKey::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(LogicalKey::RotateCcw),

        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(LogicalKey::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LogicalKey::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
