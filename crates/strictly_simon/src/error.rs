//! Errors for rejected state transitions.

use super::Phase;

/// A state-machine operation was called in a phase that does not allow it.
///
/// None of these change the game. Front ends are expected to ignore
/// them; they exist so the rejection is visible in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TransitionError {
    /// `start_game` while a game is already running.
    #[display("Cannot start: a game is already running ({})", _0)]
    AlreadyRunning(#[error(not(source))] Phase),

    /// A guess arrived outside `AwaitingGuess`.
    #[display("Guess rejected: not accepting guesses during {}", _0)]
    NotAwaitingGuess(#[error(not(source))] Phase),

    /// A playback step was requested outside `ComputerPlayback`.
    #[display("Playback step rejected during {}", _0)]
    NotInPlayback(#[error(not(source))] Phase),

    /// `advance_round` was called twice for the same playback.
    #[display("Round {} already extended the sequence", _0)]
    AlreadyAdvanced(#[error(not(source))] usize),

    /// `finish_playback` before the sequence was extended.
    #[display("Round {} has not extended the sequence yet", _0)]
    NotAdvanced(#[error(not(source))] usize),
}

/// A deserialized game does not describe a reachable state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// `total_levels` was zero.
    #[display("Game must have at least one level")]
    NoLevels,

    /// An idle game carried a sequence or a level.
    #[display("Idle game carries level {}", _0)]
    IdleNotEmpty(#[error(not(source))] usize),

    /// The playback marker was set outside `ComputerPlayback`.
    #[display("Playback marker set during {}", _0)]
    StrayPlaybackMarker(#[error(not(source))] Phase),

    /// One or more game invariants failed.
    #[display("Invariants violated: {}", _0)]
    Invariants(#[error(not(source))] String),
}
