//! Application state and logic.

use crate::presentation::{SimonEvent, TITLE};
use strictly_simon::{Color, FinalOutcome};
use tracing::debug;

/// What the terminal currently shows.
///
/// Built purely from [`SimonEvent`]s; the game itself lives in the
/// orchestrator task.
#[derive(Debug, Clone)]
pub struct App {
    heading: String,
    status: Option<String>,
    flashing: Option<Color>,
    input_allowed: bool,
    start_available: bool,
    last_sound: Option<Color>,
    last_result: Option<FinalOutcome>,
    cursor: Color,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            heading: TITLE.to_string(),
            status: None,
            flashing: None,
            input_allowed: false,
            start_available: true,
            last_sound: None,
            last_result: None,
            cursor: Color::Red,
        }
    }

    /// Current heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Current status line, if shown.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Tile currently lit.
    pub fn flashing(&self) -> Option<Color> {
        self.flashing
    }

    /// Whether tile input is accepted.
    pub fn input_allowed(&self) -> bool {
        self.input_allowed
    }

    /// Whether the start control is shown.
    pub fn start_available(&self) -> bool {
        self.start_available
    }

    /// Last tile sound played.
    pub fn last_sound(&self) -> Option<Color> {
        self.last_sound
    }

    /// Result of the last finished game.
    pub fn last_result(&self) -> Option<FinalOutcome> {
        self.last_result
    }

    /// Tile under the keyboard cursor.
    pub fn cursor(&self) -> Color {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Color) {
        self.cursor = cursor;
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: SimonEvent) {
        debug!(?event, "Handling game event");

        match event {
            SimonEvent::Heading(text) => self.heading = text,
            SimonEvent::Status(text) => self.status = text,
            SimonEvent::TileFlash(color) => self.flashing = Some(color),
            SimonEvent::TileClear(color) => {
                if self.flashing == Some(color) {
                    self.flashing = None;
                }
            }
            SimonEvent::InputAllowed(allowed) => self.input_allowed = allowed,
            SimonEvent::StartAvailable(available) => {
                self.start_available = available;
                if !available {
                    self.last_result = None;
                }
            }
            SimonEvent::Sound(color) => self.last_sound = Some(color),
            SimonEvent::Finished(outcome) => {
                self.last_result = Some(outcome);
                self.flashing = None;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_offers_start() {
        let app = App::new();
        assert_eq!(app.heading(), TITLE);
        assert!(app.start_available());
        assert!(!app.input_allowed());
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_flash_then_clear() {
        let mut app = App::new();
        app.handle_event(SimonEvent::TileFlash(Color::Blue));
        assert_eq!(app.flashing(), Some(Color::Blue));

        app.handle_event(SimonEvent::TileClear(Color::Blue));
        assert_eq!(app.flashing(), None);
    }

    #[test]
    fn test_clear_of_other_tile_keeps_flash() {
        let mut app = App::new();
        app.handle_event(SimonEvent::TileFlash(Color::Red));
        app.handle_event(SimonEvent::TileClear(Color::Green));
        assert_eq!(app.flashing(), Some(Color::Red));
    }

    #[test]
    fn test_status_hidden_by_none() {
        let mut app = App::new();
        app.handle_event(SimonEvent::Status(Some("Wait for the computer".to_string())));
        assert_eq!(app.status(), Some("Wait for the computer"));

        app.handle_event(SimonEvent::Status(None));
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_result_cleared_on_next_start() {
        let mut app = App::new();
        app.handle_event(SimonEvent::Finished(FinalOutcome::Defeat));
        assert_eq!(app.last_result(), Some(FinalOutcome::Defeat));

        app.handle_event(SimonEvent::StartAvailable(false));
        assert_eq!(app.last_result(), None);
    }
}
