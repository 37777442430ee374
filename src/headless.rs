//! Headless autoplay: an automated player against the real orchestrator.

use crate::config::SimonConfig;
use crate::orchestrator::RoundOrchestrator;
use crate::players::Player;
use crate::presentation::{ChannelPresentation, SimonEvent};
use anyhow::{Context, Result};
use derive_getters::Getters;
use strictly_simon::FinalOutcome;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct HeadlessReport {
    /// Games won.
    victories: usize,
    /// Games lost.
    defeats: usize,
}

impl HeadlessReport {
    fn record(&mut self, outcome: FinalOutcome) {
        match outcome {
            FinalOutcome::Victory => self.victories += 1,
            FinalOutcome::Defeat => self.defeats += 1,
        }
    }
}

/// Runs `player` against a fresh orchestrator until the player is done.
#[instrument(skip_all, fields(player = %player.name()))]
pub async fn run_headless<P: Player>(config: SimonConfig, mut player: P) -> Result<HeadlessReport> {
    info!("Starting headless session");

    let (presentation, mut event_rx) = ChannelPresentation::channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let mut orchestrator = RoundOrchestrator::from_config(config, presentation, input_rx);

    let orchestrator_handle = tokio::spawn(async move { orchestrator.run().await });

    let mut report = HeadlessReport::default();
    let mut input_tx = Some(input_tx);

    while let Some(event) = event_rx.recv().await {
        log_event(&event);
        if let SimonEvent::Finished(outcome) = event {
            report.record(outcome);
        }

        let inputs = player.observe(&event);
        if let Some(tx) = &input_tx {
            for input in inputs {
                tx.send(input).context("Orchestrator stopped accepting input")?;
            }
        }

        if player.is_done() && input_tx.take().is_some() {
            debug!("Player done, closing input");
        }
    }

    orchestrator_handle
        .await
        .context("Orchestrator task panicked")??;

    info!(
        victories = report.victories,
        defeats = report.defeats,
        "Headless session finished"
    );
    Ok(report)
}

fn log_event(event: &SimonEvent) {
    match event {
        SimonEvent::Heading(text) => info!(heading = %text),
        SimonEvent::Status(Some(text)) => info!(status = %text),
        SimonEvent::TileFlash(color) => info!(%color, "Flash"),
        SimonEvent::Finished(outcome) => info!(%outcome, "Game finished"),
        other => debug!(event = ?other),
    }
}
