//! Command-line interface for strictly_says.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Says - Simon memory game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_says")]
#[command(about = "Simon memory game with a type-safe state machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, default_value = "strictly_says.toml")]
    pub config: PathBuf,

    /// Seed for the color sequence
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of levels to win
    #[arg(long, global = true)]
    pub levels: Option<usize>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Ring the terminal bell for tile sounds
        #[arg(long)]
        bell: bool,
    },

    /// Let an automated player play without a UI
    Autoplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: usize,

        /// Make the player answer wrong at this level
        #[arg(long)]
        blunder_at: Option<usize>,
    },
}
