//! Round orchestration: timed playback and player turns.

use crate::config::SimonConfig;
use crate::presentation::{
    Presentation, SUCCESS_MESSAGE, TITLE, WAIT_MESSAGE, level_heading, remaining_guesses_message,
};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use strictly_simon::{Color, FinalOutcome, GuessOutcome, SimonGame};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the input side to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// The start control was used.
    Start,
    /// A tile was selected.
    TileSelected(Color),
}

impl PlayerInput {
    /// Builds a tile selection from a color label.
    ///
    /// Unknown labels yield `None` and are meant to be dropped.
    pub fn tile_from_label(label: &str) -> Option<Self> {
        Color::from_label(label).map(PlayerInput::TileSelected)
    }
}

/// Drives a Simon game: extends the sequence, plays it back with
/// delays, then hands the turn to the player.
///
/// Exactly one turn is active at a time. Inputs that arrive while the
/// orchestrator is suspended in playback are drained and dropped, so a
/// guess can never land mid-playback.
pub struct RoundOrchestrator<P, R = StdRng> {
    game: SimonGame,
    config: SimonConfig,
    presentation: P,
    rng: R,
    input_rx: mpsc::UnboundedReceiver<PlayerInput>,
}

impl<P: Presentation> RoundOrchestrator<P, StdRng> {
    /// Creates an orchestrator seeded from the config, or from entropy.
    pub fn from_config(
        config: SimonConfig,
        presentation: P,
        input_rx: mpsc::UnboundedReceiver<PlayerInput>,
    ) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, presentation, rng, input_rx)
    }
}

impl<P: Presentation, R: Rng + Send> RoundOrchestrator<P, R> {
    /// Creates an orchestrator with an explicit random source.
    pub fn new(
        config: SimonConfig,
        presentation: P,
        rng: R,
        input_rx: mpsc::UnboundedReceiver<PlayerInput>,
    ) -> Self {
        Self {
            game: SimonGame::new(*config.total_levels()),
            config,
            presentation,
            rng,
            input_rx,
        }
    }

    /// The game being driven.
    pub fn game(&self) -> &SimonGame {
        &self.game
    }

    /// Processes inputs until the input channel closes.
    #[instrument(skip(self), fields(total_levels = self.game.total_levels()))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting round orchestration");
        self.show_idle();

        while let Some(input) = self.input_rx.recv().await {
            self.handle_input(input).await?;
        }

        info!("Input channel closed, stopping");
        Ok(())
    }

    /// Handles one player input.
    #[instrument(skip(self), fields(phase = %self.game.phase(), level = self.game.level()))]
    pub async fn handle_input(&mut self, input: PlayerInput) -> Result<()> {
        match input {
            PlayerInput::Start => self.start().await,
            PlayerInput::TileSelected(color) => self.tile_selected(color).await,
        }
    }

    async fn start(&mut self) -> Result<()> {
        if self.game.phase().is_running() {
            debug!("Start ignored while a game is running");
            return Ok(());
        }

        self.presentation.start_available_changed(false);
        self.game.start_game()?;
        self.play_round().await
    }

    async fn tile_selected(&mut self, color: Color) -> Result<()> {
        let outcome = match self.game.submit_guess(color) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, %color, "Tile selection ignored");
                return Ok(());
            }
        };

        self.presentation.play_sound(color);

        match outcome {
            GuessOutcome::Continue { remaining } => {
                self.presentation
                    .status_changed(Some(remaining_guesses_message(remaining).as_str()));
            }
            GuessOutcome::RoundComplete { level } => {
                info!(level, "Round complete");
                self.presentation.input_allowed_changed(false);
                self.presentation.status_changed(Some(SUCCESS_MESSAGE));
                self.pause(self.config.round_complete_delay()).await;
                self.play_round().await?;
            }
            GuessOutcome::Won => {
                info!(level = self.game.level(), "Player won");
                self.presentation
                    .status_changed(Some(remaining_guesses_message(0).as_str()));
                self.finish(FinalOutcome::Victory);
            }
            GuessOutcome::Lost {
                index,
                expected,
                guessed,
            } => {
                info!(index, %expected, %guessed, "Player lost");
                self.finish(FinalOutcome::Defeat);
            }
        }

        Ok(())
    }

    /// Extends the sequence, plays all of it back, then opens the turn.
    #[instrument(skip(self), fields(level = self.game.level()))]
    async fn play_round(&mut self) -> Result<()> {
        self.game.advance_round(&mut self.rng)?;
        let level = self.game.level();
        debug!(level, "Playing back sequence");

        self.presentation
            .heading_changed(&level_heading(level, self.game.total_levels()));
        self.presentation.input_allowed_changed(false);
        self.presentation.status_changed(Some(WAIT_MESSAGE));

        let sequence = self.game.sequence().to_vec();
        for color in sequence {
            self.presentation.play_sound(color);
            self.presentation.tile_flash(color);
            self.pause(self.config.flash()).await;
            self.presentation.tile_clear(color);
            self.pause(self.config.gap()).await;
        }

        self.pause(self.config.pre_guess_delay()).await;

        let remaining = self.game.finish_playback()?;
        self.presentation
            .status_changed(Some(remaining_guesses_message(remaining).as_str()));
        self.presentation.input_allowed_changed(true);
        Ok(())
    }

    /// Sleeps for `duration`, dropping any input that arrives meanwhile.
    async fn pause(&mut self, duration: Duration) {
        let sleep = tokio::time::sleep(duration);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                () = &mut sleep => return,
                input = self.input_rx.recv() => match input {
                    Some(input) => debug!(?input, "Input dropped during playback"),
                    None => {
                        // Sender gone; finish the delay anyway.
                        (&mut sleep).await;
                        return;
                    }
                },
            }
        }
    }

    fn finish(&mut self, outcome: FinalOutcome) {
        self.presentation.game_finished(outcome);
        self.game.reset();
        self.show_idle();
    }

    fn show_idle(&mut self) {
        self.presentation.heading_changed(TITLE);
        self.presentation.status_changed(None);
        self.presentation.input_allowed_changed(false);
        self.presentation.start_available_changed(true);
    }
}
