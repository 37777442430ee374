//! A player that repeats what it was shown.

use super::Player;
use crate::orchestrator::PlayerInput;
use crate::presentation::SimonEvent;
use derive_new::new;
use strictly_simon::{Color, FinalOutcome};
use tracing::{debug, instrument};

/// Watches the computer's flashes and plays them back when its turn opens.
///
/// With `blunder_at_level` set, the last guess of that level is swapped
/// for a wrong color, so the game is lost there.
#[derive(Debug, new)]
pub struct MimicPlayer {
    name: String,
    /// Games to start before stopping.
    games: usize,
    blunder_at_level: Option<usize>,
    #[new(default)]
    started: usize,
    #[new(default)]
    results: Vec<FinalOutcome>,
    #[new(default)]
    shown: Vec<Color>,
    #[new(default)]
    watching: bool,
}

impl MimicPlayer {
    /// Outcomes of the games finished so far.
    pub fn results(&self) -> &[FinalOutcome] {
        &self.results
    }

    /// Builds the guesses for the sequence just shown.
    #[instrument(skip(self), fields(player = %self.name, level = self.shown.len()))]
    fn answer(&self) -> Vec<PlayerInput> {
        let level = self.shown.len();
        let mut guesses = self.shown.clone();

        if self.blunder_at_level == Some(level)
            && let Some(last) = guesses.last_mut()
        {
            *last = wrong_color(*last);
            debug!(wrong = %last, "Blundering on purpose");
        }

        guesses.into_iter().map(PlayerInput::TileSelected).collect()
    }
}

/// Any color other than `color`.
fn wrong_color(color: Color) -> Color {
    match color {
        Color::Red => Color::Green,
        Color::Green => Color::Blue,
        Color::Blue => Color::Yellow,
        Color::Yellow => Color::Red,
    }
}

impl Player for MimicPlayer {
    fn observe(&mut self, event: &SimonEvent) -> Vec<PlayerInput> {
        match event {
            SimonEvent::TileFlash(color) => {
                if !self.watching {
                    self.shown.clear();
                    self.watching = true;
                }
                self.shown.push(*color);
                Vec::new()
            }
            SimonEvent::InputAllowed(true) => {
                self.watching = false;
                self.answer()
            }
            SimonEvent::StartAvailable(true) if self.started < self.games => {
                self.started += 1;
                debug!(player = %self.name, game = self.started, "Starting game");
                vec![PlayerInput::Start]
            }
            SimonEvent::Finished(outcome) => {
                self.results.push(*outcome);
                self.shown.clear();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_done(&self) -> bool {
        self.results.len() >= self.games
    }
}
