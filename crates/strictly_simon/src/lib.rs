//! Pure Simon memory game logic.
//!
//! The computer grows a sequence of colors by one each round and the
//! player must reproduce the whole sequence in order. This crate holds
//! only the rules and the state machine; timing, sound and rendering
//! live with the caller.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_simon::{GuessOutcome, Phase, SimonGame};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut game = SimonGame::default();
//! game.start_game().unwrap();
//! let color = game.advance_round(&mut rng).unwrap();
//! game.finish_playback().unwrap();
//!
//! let outcome = game.submit_guess(color).unwrap();
//! assert_eq!(outcome, GuessOutcome::RoundComplete { level: 1 });
//! assert_eq!(game.phase(), Phase::ComputerPlayback);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod color;
mod error;
mod game;
pub mod invariants;
mod phase;
pub mod rules;

pub use color::Color;
pub use error::{SnapshotError, TransitionError};
pub use game::{SimonGame, TOTAL_LEVELS};
pub use phase::{FinalOutcome, GuessOutcome, Phase};
