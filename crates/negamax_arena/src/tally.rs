//! Win/draw counts over a batch of games.

use derive_getters::Getters;
use negamax_tictactoe::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Aggregated results, from X's and O's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Tally {
    x_wins: u64,
    o_wins: u64,
    draws: u64,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally holding a single game.
    pub fn from_outcome(outcome: Outcome) -> Self {
        let mut tally = Self::new();
        tally.record(outcome);
        tally
    }

    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Combines two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }

    /// Number of games counted.
    pub fn total(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    /// X win rate as a percentage.
    pub fn x_win_rate(&self) -> f64 {
        self.percent(self.x_wins)
    }

    /// O win rate as a percentage.
    pub fn o_win_rate(&self) -> f64 {
        self.percent(self.o_wins)
    }

    /// Draw rate as a percentage.
    pub fn draw_rate(&self) -> f64 {
        self.percent(self.draws)
    }

    fn percent(&self, count: u64) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }
}
