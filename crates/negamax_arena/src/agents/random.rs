//! Agent that plays uniformly random legal moves.

use super::Agent;
use negamax_tictactoe::{GameState, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Picks a legal move uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomAgent<R> {
    name: String,
    rng: R,
}

impl<R: Rng + Send> RandomAgent<R> {
    /// Creates a random agent drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng + Send> Agent for RandomAgent<R> {
    fn choose_move(&mut self, state: &GameState) -> Option<Position> {
        let choice = state.legal_moves().choose(&mut self.rng).copied();
        trace!(agent = %self.name, ?choice, "Random move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_move_is_legal() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        let mut agent = RandomAgent::new("r", ChaCha8Rng::seed_from_u64(7));
        for _ in 0..50 {
            let mv = agent.choose_move(&state).expect("Moves available");
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let state = GameState::new();
        let mut a = RandomAgent::new("a", ChaCha8Rng::seed_from_u64(3));
        let mut b = RandomAgent::new("b", ChaCha8Rng::seed_from_u64(3));
        for _ in 0..20 {
            assert_eq!(a.choose_move(&state), b.choose_move(&state));
        }
    }
}
