//! The Simon state machine.

use super::invariants::{InvariantSet, SimonInvariants, assert_invariants};
use super::rules::{self, Evaluation};
use super::{Color, GuessOutcome, Phase, SnapshotError, TransitionError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of levels in a standard game.
pub const TOTAL_LEVELS: usize = 5;

/// Complete state of one Simon game.
///
/// Owned by whoever drives the game (usually the round orchestrator).
/// All mutation goes through guarded transitions, so the phase and the
/// data can never disagree. Deserialized games are validated the same
/// way and rejected with [`SnapshotError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct SimonGame {
    /// Current round, 0 before the first round.
    level: usize,
    /// Colors generated by the computer so far.
    sequence: Vec<Color>,
    /// Player guesses in the current round.
    guesses: Vec<Color>,
    /// Current phase.
    phase: Phase,
    /// Level at which the game is won.
    total_levels: usize,
    /// Whether the current playback already appended its color.
    extended: bool,
}

impl SimonGame {
    /// Creates an idle game with the given number of levels (at least 1).
    #[instrument]
    pub fn new(total_levels: usize) -> Self {
        Self {
            level: 0,
            sequence: Vec::new(),
            guesses: Vec::new(),
            phase: Phase::Idle,
            total_levels: total_levels.max(1),
            extended: false,
        }
    }

    /// Current level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The computer's sequence.
    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// Guesses made this round.
    pub fn guesses(&self) -> &[Color] {
        &self.guesses
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Level at which the game is won.
    pub fn total_levels(&self) -> usize {
        self.total_levels
    }

    /// Guesses still needed to finish the round.
    pub fn remaining_guesses(&self) -> usize {
        rules::remaining_guesses(&self.sequence, &self.guesses)
    }

    /// Returns to `Idle`, discarding the sequence and guesses.
    #[instrument(skip(self), fields(phase = %self.phase, level = self.level))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.level = 0;
        self.sequence.clear();
        self.guesses.clear();
        self.phase = Phase::Idle;
        self.extended = false;
    }

    /// Starts a new game, entering playback for round 1.
    ///
    /// Allowed from `Idle` and from a finished game, which is reset first.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self) -> Result<(), TransitionError> {
        if self.phase.is_running() {
            warn!("Start requested while a game is running");
            return Err(TransitionError::AlreadyRunning(self.phase));
        }

        self.reset();
        self.phase = Phase::ComputerPlayback;
        info!(total_levels = self.total_levels, "Game started");
        assert_invariants(self);
        Ok(())
    }

    /// Extends the sequence by one random color and bumps the level.
    ///
    /// Valid once per playback. Returns the appended color.
    #[instrument(skip(self, rng), fields(phase = %self.phase, level = self.level))]
    pub fn advance_round<R: Rng>(&mut self, rng: &mut R) -> Result<Color, TransitionError> {
        let color = Color::random(rng);
        self.advance_round_with(color)?;
        Ok(color)
    }

    /// Extends the sequence with a chosen color and bumps the level.
    ///
    /// Same guards as [`SimonGame::advance_round`]; useful for replays and
    /// scripted games.
    #[instrument(skip(self), fields(phase = %self.phase, level = self.level))]
    pub fn advance_round_with(&mut self, color: Color) -> Result<(), TransitionError> {
        if self.phase != Phase::ComputerPlayback {
            return Err(TransitionError::NotInPlayback(self.phase));
        }
        if self.extended || self.level >= self.total_levels {
            return Err(TransitionError::AlreadyAdvanced(self.level));
        }

        self.extended = true;
        self.level += 1;
        self.sequence.push(color);
        self.guesses.clear();
        debug!(level = self.level, %color, "Sequence extended");
        assert_invariants(self);
        Ok(())
    }

    /// Ends playback and starts accepting guesses.
    ///
    /// Returns the number of guesses required this round.
    #[instrument(skip(self), fields(phase = %self.phase, level = self.level))]
    pub fn finish_playback(&mut self) -> Result<usize, TransitionError> {
        if self.phase != Phase::ComputerPlayback {
            return Err(TransitionError::NotInPlayback(self.phase));
        }
        if !self.extended {
            return Err(TransitionError::NotAdvanced(self.level));
        }

        self.extended = false;
        self.phase = Phase::AwaitingGuess;
        assert_invariants(self);
        Ok(self.remaining_guesses())
    }

    /// Records a guess and evaluates it against the sequence.
    ///
    /// Outside `AwaitingGuess` nothing changes and an error is returned.
    #[instrument(skip(self), fields(phase = %self.phase, level = self.level))]
    pub fn submit_guess(&mut self, color: Color) -> Result<GuessOutcome, TransitionError> {
        if !self.phase.accepts_guesses() {
            debug!("Guess ignored");
            return Err(TransitionError::NotAwaitingGuess(self.phase));
        }

        self.guesses.push(color);

        let outcome = match rules::evaluate(
            &self.sequence,
            &self.guesses,
            self.level,
            self.total_levels,
        ) {
            Evaluation::Mismatch(index) => {
                self.phase = Phase::Lost;
                let expected = self.sequence.get(index).copied().unwrap_or(color);
                info!(index, %expected, guessed = %color, "Wrong guess, game lost");
                GuessOutcome::Lost {
                    index,
                    expected,
                    guessed: color,
                }
            }
            Evaluation::Finished => {
                self.phase = Phase::Won;
                info!("Final level reproduced, game won");
                GuessOutcome::Won
            }
            Evaluation::Complete => {
                self.guesses.clear();
                self.phase = Phase::ComputerPlayback;
                info!(level = self.level, "Round complete");
                GuessOutcome::RoundComplete { level: self.level }
            }
            Evaluation::Partial(remaining) => {
                debug!(remaining, "Correct guess");
                GuessOutcome::Continue { remaining }
            }
        };

        debug_assert_eq!(outcome.is_final(), self.phase.is_terminal());
        assert_invariants(self);
        Ok(outcome)
    }
}

impl Default for SimonGame {
    fn default() -> Self {
        Self::new(TOTAL_LEVELS)
    }
}

/// Unchecked wire form of [`SimonGame`].
#[derive(Deserialize)]
struct GameSnapshot {
    level: usize,
    sequence: Vec<Color>,
    guesses: Vec<Color>,
    phase: Phase,
    total_levels: usize,
    extended: bool,
}

impl TryFrom<GameSnapshot> for SimonGame {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        if snapshot.total_levels == 0 {
            return Err(SnapshotError::NoLevels);
        }
        if snapshot.phase == Phase::Idle && (snapshot.level > 0 || !snapshot.sequence.is_empty()) {
            return Err(SnapshotError::IdleNotEmpty(snapshot.level));
        }
        if snapshot.extended && snapshot.phase != Phase::ComputerPlayback {
            return Err(SnapshotError::StrayPlaybackMarker(snapshot.phase));
        }

        let game = Self {
            level: snapshot.level,
            sequence: snapshot.sequence,
            guesses: snapshot.guesses,
            phase: snapshot.phase,
            total_levels: snapshot.total_levels,
            extended: snapshot.extended,
        };

        SimonInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            SnapshotError::Invariants(descriptions.join("; "))
        })?;

        Ok(game)
    }
}

#[cfg(test)]
impl SimonGame {
    /// Builds a game already waiting for guesses against `sequence`.
    pub(crate) fn awaiting(sequence: Vec<Color>, total_levels: usize) -> Self {
        Self {
            level: sequence.len(),
            sequence,
            guesses: Vec::new(),
            phase: Phase::AwaitingGuess,
            total_levels,
            extended: false,
        }
    }

    pub(crate) fn guesses_mut(&mut self) -> &mut Vec<Color> {
        &mut self.guesses
    }
}
