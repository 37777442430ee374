//! Game phases and the outcomes of a single guess.

use super::Color;
use serde::{Deserialize, Serialize};

/// Where the game currently is.
///
/// Guesses are accepted only in [`Phase::AwaitingGuess`]; this is the
/// single guard keeping clicks out of the computer's playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Before the first start, or after a reset.
    #[display("idle")]
    Idle,
    /// The computer is extending and showing its sequence.
    #[display("computer playback")]
    ComputerPlayback,
    /// The player is reproducing the sequence.
    #[display("awaiting guess")]
    AwaitingGuess,
    /// Every level was completed.
    #[display("won")]
    Won,
    /// A guess did not match the sequence.
    #[display("lost")]
    Lost,
}

impl Phase {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    /// Returns true while a game is being played.
    pub fn is_running(self) -> bool {
        matches!(self, Phase::ComputerPlayback | Phase::AwaitingGuess)
    }

    /// Returns true only when the player may submit a guess.
    pub fn accepts_guesses(self) -> bool {
        self == Phase::AwaitingGuess
    }
}

/// Result of submitting one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Correct so far; more guesses are needed this round.
    Continue {
        /// Guesses still required to finish the round.
        remaining: usize,
    },
    /// The whole sequence was reproduced; the next round is due.
    RoundComplete {
        /// Level that was just completed.
        level: usize,
    },
    /// The final level was reproduced.
    Won,
    /// The guess did not match the sequence.
    Lost {
        /// Position of the wrong guess.
        index: usize,
        /// Color the sequence holds at that position.
        expected: Color,
        /// Color the player chose.
        guessed: Color,
    },
}

impl GuessOutcome {
    /// Returns true if this outcome ends the game.
    pub fn is_final(&self) -> bool {
        matches!(self, GuessOutcome::Won | GuessOutcome::Lost { .. })
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FinalOutcome {
    /// All levels completed.
    #[display("You won!")]
    Victory,
    /// Wrong guess.
    #[display("Sorry, game over.")]
    Defeat,
}
