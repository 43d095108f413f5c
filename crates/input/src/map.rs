//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    match key.code {
        KeyCode::Char(' ') => Some(GameEvent::Drop),
        KeyCode::Enter => Some(GameEvent::Reset),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameEvent::Continue),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Callers must test this before [`handle_key_event`] so Ctrl-C wins over
/// the continue binding.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
