//! Parallel batch simulation.

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::matchup::Matchup;
use crate::orchestrator::play_single_game;
use crate::tally::Tally;
use derive_getters::Getters;
use derive_new::new;
use rand::RngCore;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, instrument};

/// Result of one simulated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct BatchReport {
    matchup: Matchup,
    tally: Tally,
    games: u64,
    threads: usize,
    seed: u64,
    elapsed_secs: f64,
}

impl BatchReport {
    /// Mean wall-clock seconds per game.
    pub fn average_game_secs(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.elapsed_secs / self.games as f64
        }
    }

    /// Multi-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}\n  X wins: {} ({:.1}%)\n  O wins: {} ({:.1}%)\n  Draws:  {} ({:.1}%)\n  \
             Simulated {} games on {} threads in {:.3}s ({:.6}s per game, seed {})",
            self.matchup,
            self.tally.x_wins(),
            self.tally.x_win_rate(),
            self.tally.o_wins(),
            self.tally.o_win_rate(),
            self.tally.draws(),
            self.tally.draw_rate(),
            self.games,
            self.threads,
            self.elapsed_secs,
            self.average_game_secs(),
            self.seed,
        )
    }
}

/// Plays `config.games()` games of `matchup` on a dedicated thread pool.
///
/// Game `i` seeds its agents from `seed + i`, so a fixed seed gives the same
/// tally whatever the thread count.
///
/// # Errors
///
/// Returns [`SimulationError`] for an invalid config, a pool that cannot be
/// built, or a game that fails to complete.
#[instrument(skip(config), fields(games = config.games()))]
pub fn simulate(config: &SimulationConfig, matchup: Matchup) -> Result<BatchReport, SimulationError> {
    config.validate()?;

    let games = *config.games();
    let threads = config.resolved_threads();
    let seed = (*config.seed()).unwrap_or_else(|| rand::thread_rng().next_u64());
    info!(%matchup, threads, seed, "Starting batch");

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    let start = Instant::now();
    let tally = pool.install(|| {
        (0..games)
            .into_par_iter()
            .map(|i| {
                play_single_game(matchup, seed.wrapping_add(i))
                    .map(|record| Tally::from_outcome(*record.outcome()))
            })
            .try_reduce(Tally::new, |a, b| Ok(a.merge(b)))
    })?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    info!(
        %matchup,
        x_wins = tally.x_wins(),
        o_wins = tally.o_wins(),
        draws = tally.draws(),
        elapsed_secs,
        "Batch complete"
    );
    Ok(BatchReport::new(matchup, tally, games, threads, seed, elapsed_secs))
}

/// Runs every matchup in `config` in order.
///
/// # Errors
///
/// Stops at the first batch that fails.
#[instrument(skip(config))]
pub fn simulate_all(config: &SimulationConfig) -> Result<Vec<BatchReport>, SimulationError> {
    config
        .matchups()
        .iter()
        .map(|&matchup| simulate(config, matchup))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_game_secs() {
        let report = BatchReport::new(Matchup::RandomVsRandom, Tally::new(), 4, 1, 0, 2.0);
        assert_eq!(report.average_game_secs(), 0.5);
        assert!(report.summary().contains("Random vs Random"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimulationConfig::default().with_games(0);
        assert!(simulate(&config, Matchup::RandomVsRandom).is_err());
    }
}
