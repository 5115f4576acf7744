//! Key bindings.

use crossterm::event::KeyCode;
use strictly_2048::Direction;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Slide the board.
    Move(Direction),
    /// Start over.
    NewGame,
    /// Rewind the move that ended the game.
    Continue,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
///
/// Arrows, WASD and hjkl all slide the board. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Action::Move(Direction::Right),
        KeyCode::Char('n' | 'N' | 'r') => Action::NewGame,
        KeyCode::Char('c' | 'C') => Action::Continue,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}
