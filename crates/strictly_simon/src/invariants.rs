//! First-class invariants for Simon.
//!
//! Invariants are logical properties of [`SimonGame`] that every
//! transition must preserve. They are checked in debug builds after each
//! mutation and can be tested on their own.

use super::{Phase, SimonGame};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: while guessing, the guesses are a prefix of the sequence.
pub struct GuessesArePrefix;

impl Invariant<SimonGame> for GuessesArePrefix {
    fn holds(game: &SimonGame) -> bool {
        game.phase() != Phase::AwaitingGuess || game.sequence().starts_with(game.guesses())
    }

    fn description() -> &'static str {
        "Guesses are a prefix of the sequence while awaiting guesses"
    }
}

/// Invariant: there are never more guesses than colors in the sequence.
pub struct GuessesBounded;

impl Invariant<SimonGame> for GuessesBounded {
    fn holds(game: &SimonGame) -> bool {
        game.guesses().len() <= game.sequence().len()
    }

    fn description() -> &'static str {
        "Guess count never exceeds sequence length"
    }
}

/// Invariant: one color per level, and the level never passes the last one.
pub struct SequenceTracksLevel;

impl Invariant<SimonGame> for SequenceTracksLevel {
    fn holds(game: &SimonGame) -> bool {
        game.sequence().len() == game.level() && game.level() <= game.total_levels()
    }

    fn description() -> &'static str {
        "Sequence length equals level, and level <= total levels"
    }
}

/// All Simon invariants as a composable set.
pub type SimonInvariants = (GuessesArePrefix, GuessesBounded, SequenceTracksLevel);

/// Asserts every invariant in debug builds.
pub fn assert_invariants(game: &SimonGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = SimonInvariants::check_all(game)
    {
        panic!("Simon invariants violated: {:?}", violations);
    }
}
