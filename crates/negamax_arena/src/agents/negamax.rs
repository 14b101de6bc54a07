//! Agent backed by the exhaustive negamax search.

use super::Agent;
use negamax_tictactoe::{GameState, Negamax, Position};
use tracing::debug;

/// Plays the negamax best move, ties going to the lowest board index.
#[derive(Debug, Clone)]
pub struct NegamaxAgent {
    name: String,
    search: Negamax,
}

impl NegamaxAgent {
    /// Creates a negamax agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: Negamax::new(),
        }
    }

    /// Total search nodes visited across every move this agent has chosen.
    pub fn nodes_visited(&self) -> u64 {
        self.search.nodes_visited()
    }
}

impl Agent for NegamaxAgent {
    fn choose_move(&mut self, state: &GameState) -> Option<Position> {
        let choice = self.search.best_move(state);
        debug!(agent = %self.name, ?choice, nodes = self.search.nodes_visited(), "Negamax move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
