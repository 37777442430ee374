//! Strictly Says - Simon memory game
//!
//! The rules live in [`strictly_simon`]; this crate drives them in time
//! and connects them to a front end.
//!
//! # Architecture
//!
//! - **Orchestrator**: timed rounds over an owned [`SimonGame`]
//! - **Presentation**: outbound sink for headings, flashes and sounds
//! - **Players**: automated players reacting to presentation events
//! - **TUI**: ratatui front end (view, audio cue and input collaborators)
//!
//! # Example
//!
//! ```no_run
//! use strictly_says::{ChannelPresentation, PlayerInput, RoundOrchestrator, SimonConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (presentation, _events) = ChannelPresentation::channel();
//! let (input_tx, input_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut orchestrator =
//!     RoundOrchestrator::from_config(SimonConfig::default(), presentation, input_rx);
//!
//! input_tx.send(PlayerInput::Start)?;
//! drop(input_tx);
//! orchestrator.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod headless;
mod orchestrator;
mod players;
mod presentation;
pub mod tui;

pub use config::{ConfigError, SimonConfig};
pub use headless::{HeadlessReport, run_headless};
pub use orchestrator::{PlayerInput, RoundOrchestrator};
pub use players::{MimicPlayer, Player};
pub use presentation::{
    ChannelPresentation, Presentation, SUCCESS_MESSAGE, SimonEvent, TITLE, WAIT_MESSAGE,
    level_heading, remaining_guesses_message,
};

pub use strictly_simon::{
    Color, FinalOutcome, GuessOutcome, Phase, SimonGame, TOTAL_LEVELS, TransitionError,
};
