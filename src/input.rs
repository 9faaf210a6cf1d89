//! Key mapping and input dispatch for the game screen.

use crate::game::Game;
use crossterm::event::KeyCode;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneInput {
    /// Space, Up, or Enter.
    Tap,
    /// `q` or Esc.
    Quit,
    /// Any other key.
    Other,
}

pub fn map_key(code: KeyCode) -> PlaneInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => PlaneInput::Tap,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => PlaneInput::Quit,
        _ => PlaneInput::Other,
    }
}

/// Feed one input event into the game. Quit is the frame loop's business;
/// everything else is ignored once the run has ended.
pub fn process_input(game: &mut Game, input: PlaneInput) {
    if input == PlaneInput::Tap {
        game.tap();
    }
}
