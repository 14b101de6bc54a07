//! Batch simulation configuration.

use crate::matchup::Matchup;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Games played per matchup.
    #[serde(default = "default_games")]
    games: u64,

    /// Worker threads. Uses the available parallelism when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threads: Option<usize>,

    /// Base seed for the random agents. Drawn from entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Matchups to simulate, in order.
    #[serde(default = "default_matchups")]
    matchups: Vec<Matchup>,

    /// Show the bar chart after the batch.
    #[serde(default)]
    chart: bool,
}

fn default_games() -> u64 {
    1000
}

fn default_matchups() -> Vec<Matchup> {
    vec![Matchup::NegamaxVsRandom, Matchup::NegamaxVsNegamax]
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            threads: None,
            seed: None,
            matchups: default_matchups(),
            chart: false,
        }
    }
}

impl SimulationConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(games = config.games, matchups = config.matchups.len(), "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides the number of games.
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Overrides the worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Fixes the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the matchup list.
    pub fn with_matchups(mut self, matchups: Vec<Matchup>) -> Self {
        self.matchups = matchups;
        self
    }

    /// Enables or disables the chart.
    pub fn with_chart(mut self, chart: bool) -> Self {
        self.chart = chart;
        self
    }

    /// Checks that the values describe a runnable batch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::new("threads must be at least 1"));
        }
        if self.matchups.is_empty() {
            return Err(ConfigError::new("at least one matchup is required"));
        }
        Ok(())
    }

    /// Worker count to use: the configured value or the machine's parallelism.
    pub fn resolved_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(*config.games(), 1000);
        assert_eq!(*config.threads(), None);
        assert_eq!(
            config.matchups(),
            &vec![Matchup::NegamaxVsRandom, Matchup::NegamaxVsNegamax]
        );
        assert!(!config.chart());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimulationConfig = toml::from_str("games = 10\n").expect("Valid TOML");
        assert_eq!(*config.games(), 10);
        assert_eq!(config.matchups().len(), 2);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(SimulationConfig::default().with_games(0).validate().is_err());
        assert!(SimulationConfig::default().with_threads(0).validate().is_err());
        assert!(
            SimulationConfig::default()
                .with_matchups(Vec::new())
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_resolved_threads() {
        assert_eq!(SimulationConfig::default().with_threads(3).resolved_threads(), 3);
        assert!(SimulationConfig::default().resolved_threads() >= 1);
    }
}
