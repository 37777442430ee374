//! Automated players.

mod mimic;

pub use mimic::MimicPlayer;

use crate::orchestrator::PlayerInput;
use crate::presentation::SimonEvent;

/// Trait for players that react to what the game shows.
pub trait Player: Send {
    /// Observes one presentation event and returns the inputs it triggers.
    fn observe(&mut self, event: &SimonEvent) -> Vec<PlayerInput>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true once the player wants to stop.
    fn is_done(&self) -> bool;
}
