//! Keyboard mapping and cursor movement.

use super::app::App;
use crate::orchestrator::PlayerInput;
use crossterm::event::KeyCode;
use strictly_simon::Color;

/// What a key press means to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input to the orchestrator.
    Input(PlayerInput),
    /// Move the cursor to a tile.
    Cursor(Color),
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Tiles sit in a 2x2 grid: red, green on top; blue, yellow below.
pub fn move_cursor(cursor: Color, key: KeyCode) -> Color {
    use Color::*;

    match (cursor, key) {
        (Red, KeyCode::Right) => Green,
        (Blue, KeyCode::Right) => Yellow,
        (Green, KeyCode::Left) => Red,
        (Yellow, KeyCode::Left) => Blue,
        (Red, KeyCode::Down) => Blue,
        (Green, KeyCode::Down) => Yellow,
        (Blue, KeyCode::Up) => Red,
        (Yellow, KeyCode::Up) => Green,
        _ => cursor,
    }
}

/// Maps a key to an action given the current view.
///
/// Tile keys are forwarded even when input is not allowed; the
/// orchestrator ignores them outside the player's turn.
pub fn map_key(app: &App, key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('s') | KeyCode::Enter => {
            if app.start_available() {
                KeyAction::Input(PlayerInput::Start)
            } else {
                KeyAction::Ignore
            }
        }
        KeyCode::Char(' ') => KeyAction::Input(PlayerInput::TileSelected(app.cursor())),
        KeyCode::Char(c) => {
            let by_digit = c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(|i| Color::ALL.get(i).copied());
            match by_digit.or_else(|| Color::from_shortcut(c)) {
                Some(color) => KeyAction::Input(PlayerInput::TileSelected(color)),
                None => KeyAction::Ignore,
            }
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(app.cursor(), key))
        }
        _ => KeyAction::Ignore,
    }
}
