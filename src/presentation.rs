//! Outbound presentation sink.
//!
//! The orchestrator never draws or plays audio itself; it reports what
//! should be shown and heard through [`Presentation`]. Front ends either
//! implement the trait directly or consume [`SimonEvent`]s from a channel.

use strictly_simon::{Color, FinalOutcome};
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Heading shown before a game starts.
pub const TITLE: &str = "Simon Game";

/// Heading for a round in progress.
pub fn level_heading(level: usize, total_levels: usize) -> String {
    format!("Level {} of {}", level, total_levels)
}

/// Status shown while the player is guessing.
pub fn remaining_guesses_message(remaining: usize) -> String {
    format!("Your turn. click {} tile(s).", remaining)
}

/// Status shown during computer playback.
pub const WAIT_MESSAGE: &str = "Wait for the computer";

/// Status shown after a completed round.
pub const SUCCESS_MESSAGE: &str = "Success! Keep going!";

/// Everything the game wants shown or heard.
pub trait Presentation: Send {
    /// The heading text changed.
    fn heading_changed(&mut self, text: &str);

    /// The status line changed. `None` hides it.
    fn status_changed(&mut self, text: Option<&str>);

    /// A tile lit up. At most one tile is lit at a time.
    fn tile_flash(&mut self, color: Color);

    /// The lit tile went dark.
    fn tile_clear(&mut self, color: Color);

    /// Tile input became allowed or disallowed.
    fn input_allowed_changed(&mut self, allowed: bool);

    /// The start control became available or unavailable.
    fn start_available_changed(&mut self, available: bool);

    /// A tile's sound should play.
    fn play_sound(&mut self, color: Color);

    /// The game ended with a victory or defeat.
    fn game_finished(&mut self, outcome: FinalOutcome);
}

/// A presentation callback as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimonEvent {
    /// Heading text changed.
    Heading(String),
    /// Status line changed; `None` hides it.
    Status(Option<String>),
    /// Tile lit.
    TileFlash(Color),
    /// Tile dark.
    TileClear(Color),
    /// Input allowed or not.
    InputAllowed(bool),
    /// Start control available or not.
    StartAvailable(bool),
    /// Tile sound.
    Sound(Color),
    /// Victory or defeat.
    Finished(FinalOutcome),
}

/// Forwards every callback as a [`SimonEvent`] on an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelPresentation {
    event_tx: mpsc::UnboundedSender<SimonEvent>,
}

impl ChannelPresentation {
    /// Creates a sink sending to `event_tx`.
    pub fn new(event_tx: mpsc::UnboundedSender<SimonEvent>) -> Self {
        Self { event_tx }
    }

    /// Creates a sink together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SimonEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self::new(event_tx), event_rx)
    }

    fn send(&self, event: SimonEvent) {
        trace!(?event, "Presentation event");
        if let Err(e) = self.event_tx.send(event) {
            warn!(event = ?e.0, "Presentation receiver dropped");
        }
    }
}

impl Presentation for ChannelPresentation {
    fn heading_changed(&mut self, text: &str) {
        self.send(SimonEvent::Heading(text.to_string()));
    }

    fn status_changed(&mut self, text: Option<&str>) {
        self.send(SimonEvent::Status(text.map(str::to_string)));
    }

    fn tile_flash(&mut self, color: Color) {
        self.send(SimonEvent::TileFlash(color));
    }

    fn tile_clear(&mut self, color: Color) {
        self.send(SimonEvent::TileClear(color));
    }

    fn input_allowed_changed(&mut self, allowed: bool) {
        self.send(SimonEvent::InputAllowed(allowed));
    }

    fn start_available_changed(&mut self, available: bool) {
        self.send(SimonEvent::StartAvailable(available));
    }

    fn play_sound(&mut self, color: Color) {
        self.send(SimonEvent::Sound(color));
    }

    fn game_finished(&mut self, outcome: FinalOutcome) {
        self.send(SimonEvent::Finished(outcome));
    }
}
