//! Exhaustive negamax search.
//!
//! Scores are from the perspective of the side passed to
//! [`Negamax::search`]: `+1` for a forced win, `0` for a draw, `-1` for a
//! forced loss. There is no pruning, no memoization and no depth limit; the
//! whole remaining tree is visited on every call.

use crate::state::GameState;
use crate::types::{Player, Position};
use tracing::{debug, instrument};

/// Negamax searcher with a running count of visited nodes.
#[derive(Debug, Clone, Default)]
pub struct Negamax {
    nodes_visited: u64,
}

impl Negamax {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of [`Negamax::search`] calls made since creation or the last
    /// [`Negamax::reset_stats`].
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Clears the node counter.
    pub fn reset_stats(&mut self) {
        self.nodes_visited = 0;
    }

    /// Searches `state` from `player`'s point of view.
    ///
    /// The meaning of the return value depends on `depth`:
    ///
    /// - `depth == 0`: the board index of the best move for `player`
    /// - `depth > 0`: the score of the position for `player`
    ///
    /// A terminal `state` returns its score at any depth. External callers
    /// pass `depth = 0` and `player = state.current_player()`.
    ///
    /// Moves are tried in increasing index order and only a strictly better
    /// score replaces the incumbent, so ties go to the lowest index. `state`
    /// is mutated while exploring and restored before returning.
    pub fn search(&mut self, state: &mut GameState, player: Player, depth: u32) -> i32 {
        self.nodes_visited += 1;

        if state.is_game_over() {
            return state.winner_sign() * player.sign();
        }

        // Snapshot: apply/undo reorders legal_moves underneath us.
        let mut moves = [Position::TopLeft; 9];
        let count = state.legal_moves().len();
        moves[..count].copy_from_slice(state.legal_moves());
        moves[..count].sort_unstable();

        let mut best_score = i32::MIN;
        let mut best_move = moves[0];

        for &mv in &moves[..count] {
            let score = {
                let mut child = state.scoped_move(mv);
                -self.search(&mut child, player.opponent(), depth + 1)
            };

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        if depth == 0 {
            best_move.index() as i32
        } else {
            best_score
        }
    }

    /// Best move for the side to move, or `None` if the game is over.
    #[instrument(skip(self, state), fields(player = %state.current_player()))]
    pub fn best_move(&mut self, state: &GameState) -> Option<Position> {
        if state.is_game_over() {
            return None;
        }

        let mut scratch = state.clone();
        let start = self.nodes_visited;
        let index = self.search(&mut scratch, state.current_player(), 0);
        debug!(index, nodes = self.nodes_visited - start, "Search complete");

        usize::try_from(index).ok().and_then(Position::from_index)
    }
}
