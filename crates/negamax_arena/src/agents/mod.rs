//! Agent trait and implementations.

mod negamax;
mod random;

pub use negamax::NegamaxAgent;
pub use random::RandomAgent;

use negamax_tictactoe::{GameState, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for agents that can choose moves.
pub trait Agent: Send {
    /// Chooses a move for the side to move in `state`.
    ///
    /// Returns `None` only when `state` has no legal moves.
    fn choose_move(&mut self, state: &GameState) -> Option<Position>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

/// The kinds of agent that can be seated at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    /// Picks uniformly among the legal moves.
    Random,
    /// Plays the negamax best move.
    Negamax,
}

impl AgentKind {
    /// Builds an agent of this kind. `seed` feeds the random agent's RNG and
    /// is ignored by deterministic agents.
    #[instrument]
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new("Random", ChaCha8Rng::seed_from_u64(seed))),
            AgentKind::Negamax => Box::new(NegamaxAgent::new("Negamax AI")),
        }
    }
}
