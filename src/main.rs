//! Strictly Says - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_says::{MimicPlayer, SimonConfig, run_headless, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play { bell: false }) {
        Command::Play { bell } => {
            let config = if bell { config.with_bell(true) } else { config };
            tui::run_tui(config).await
        }
        Command::Autoplay { games, blunder_at } => run_autoplay(config, games, blunder_at).await,
    }
}

/// Reads the config file if present, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<SimonConfig> {
    let mut config = if cli.config.exists() {
        SimonConfig::from_file(&cli.config)?
    } else {
        SimonConfig::default()
    };

    if let Some(levels) = cli.levels {
        config = config.with_total_levels(levels);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config.validate().context("Invalid command-line overrides")?;
    Ok(config)
}

/// Runs the mimic player without a UI, logging to stderr.
#[instrument(skip(config))]
async fn run_autoplay(config: SimonConfig, games: usize, blunder_at: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting autoplay");

    let player = MimicPlayer::new("Mimic".to_string(), games, blunder_at);
    let report = run_headless(config, player).await?;

    println!(
        "Played {} game(s): {} won, {} lost",
        report.victories() + report.defeats(),
        report.victories(),
        report.defeats()
    );
    Ok(())
}
