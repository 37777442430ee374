//! Game timing and rules configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_simon::TOTAL_LEVELS;
use tracing::{debug, info, instrument};

/// Configuration for a Simon session.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SimonConfig {
    /// Level at which the game is won.
    total_levels: usize,

    /// How long each tile stays lit during playback, in milliseconds.
    flash_ms: u64,

    /// Dark gap between two flashes, in milliseconds.
    gap_ms: u64,

    /// Pause between the end of playback and accepting guesses.
    pre_guess_delay_ms: u64,

    /// Pause between a completed round and the next playback.
    round_complete_delay_ms: u64,

    /// Seed for the color sequence. Random when absent.
    seed: Option<u64>,

    /// Ring the terminal bell for every tile sound.
    bell: bool,
}

impl Default for SimonConfig {
    fn default() -> Self {
        Self {
            total_levels: TOTAL_LEVELS,
            flash_ms: 600,
            gap_ms: 50,
            pre_guess_delay_ms: 1000,
            round_complete_delay_ms: 1000,
            seed: None,
            bell: false,
        }
    }
}

impl SimonConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(total_levels = config.total_levels, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_levels == 0 {
            return Err(ConfigError::new("total_levels must be at least 1"));
        }
        if self.flash_ms == 0 {
            return Err(ConfigError::new("flash_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Overrides the number of levels.
    pub fn with_total_levels(mut self, total_levels: usize) -> Self {
        self.total_levels = total_levels;
        self
    }

    /// Overrides the sequence seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the terminal bell.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    /// Flash duration.
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    /// Gap between flashes.
    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    /// Pause before guesses are accepted.
    pub fn pre_guess_delay(&self) -> Duration {
        Duration::from_millis(self.pre_guess_delay_ms)
    }

    /// Pause after a completed round.
    pub fn round_complete_delay(&self) -> Duration {
        Duration::from_millis(self.round_complete_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
