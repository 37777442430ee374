//! Guess evaluation for Simon.
//!
//! Pure functions over the computer's sequence and the player's guesses.
//! They carry no phase information; `SimonGame` decides what to do with
//! the result.

use super::Color;
use tracing::instrument;

/// Verdict on the guesses made so far in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The guess at this index differs from the sequence.
    Mismatch(usize),
    /// The full sequence was reproduced on the final level.
    Finished,
    /// The full sequence was reproduced; more levels remain.
    Complete,
    /// Correct so far, with this many guesses still to go.
    Partial(usize),
}

/// Returns the first index where the guesses diverge from the sequence.
///
/// Guesses past the end of the sequence count as mismatches.
#[instrument]
pub fn first_mismatch(sequence: &[Color], guesses: &[Color]) -> Option<usize> {
    guesses
        .iter()
        .enumerate()
        .find(|(i, guess)| sequence.get(*i) != Some(*guess))
        .map(|(i, _)| i)
}

/// Number of guesses still needed to reproduce the sequence.
pub fn remaining_guesses(sequence: &[Color], guesses: &[Color]) -> usize {
    sequence.len().saturating_sub(guesses.len())
}

/// Evaluates the guesses in rule order: loss, win, round complete, continue.
#[instrument]
pub fn evaluate(
    sequence: &[Color],
    guesses: &[Color],
    level: usize,
    total_levels: usize,
) -> Evaluation {
    if let Some(index) = first_mismatch(sequence, guesses) {
        return Evaluation::Mismatch(index);
    }

    if guesses.len() == sequence.len() {
        if level == total_levels {
            Evaluation::Finished
        } else {
            Evaluation::Complete
        }
    } else {
        Evaluation::Partial(remaining_guesses(sequence, guesses))
    }
}
