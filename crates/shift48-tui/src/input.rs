//! Keyboard input mapping. Arrow keys and WASD move; `q`, Esc and Ctrl-C
//! quit. The driver loop only feeds key *press* events here, so every
//! action is edge-triggered: one press, one move.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shift48_core::Direction;

/// A single player action decoded from one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Quit,
}

/// Map a key event to a game action; unknown keys are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputEvent::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputEvent::Move(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
