//! Game orchestration between two agents.

use crate::agents::Agent;
use crate::error::SimulationError;
use crate::matchup::Matchup;
use derive_getters::Getters;
use derive_new::new;
use negamax_tictactoe::{Board, GameState, Outcome, Player, Position};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Events emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was made; `board` is the position after it.
    MoveMade {
        /// Side that moved.
        player: Player,
        /// Where it played.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
        /// Number of moves played.
        moves: usize,
    },
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    moves: Vec<Position>,
    outcome: Outcome,
}

impl GameRecord {
    /// Number of moves played.
    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }
}

/// Plays one game between two agents on a private [`GameState`].
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Agent>,
    player_o: Box<dyn Agent>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(player_x: Box<dyn Agent>, player_o: Box<dyn Agent>) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
        }
    }

    /// Seats the agents of `matchup`, each random agent drawing its own
    /// stream derived from `seed`.
    #[instrument]
    pub fn from_matchup(matchup: Matchup, seed: u64) -> Self {
        let mut seeder = ChaCha8Rng::seed_from_u64(seed);
        let (x, o) = matchup.agents();
        let player_x = x.build(seeder.next_u64());
        let player_o = o.build(seeder.next_u64());
        Self::new(player_x, player_o)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Display names of the X and O agents.
    pub fn names(&self) -> (&str, &str) {
        (self.player_x.name(), self.player_o.name())
    }

    /// Runs the game loop to completion, reporting each event to `on_event`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if an agent offers no move or an illegal
    /// one.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run<F>(&mut self, mut on_event: F) -> Result<GameRecord, SimulationError>
    where
        F: FnMut(&GameEvent),
    {
        let mut moves = Vec::with_capacity(9);

        loop {
            if let Some(outcome) = self.state.outcome() {
                debug!(%outcome, moves = moves.len(), "Game over");
                on_event(&GameEvent::GameOver {
                    outcome,
                    moves: moves.len(),
                });
                return Ok(GameRecord::new(moves, outcome));
            }

            let player = self.state.current_player();
            let agent = match player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            let position = agent.choose_move(&self.state).ok_or_else(|| {
                SimulationError::new(format!("{} returned no move", agent.name()))
            })?;
            self.state.try_play(position)?;
            moves.push(position);

            on_event(&GameEvent::MoveMade {
                player,
                position,
                board: self.state.board().clone(),
            });
        }
    }

    /// Resets the board so the same agents can play again.
    pub fn restart(&mut self) {
        self.state = GameState::new();
    }
}

/// Plays a single silent game of `matchup`.
///
/// # Errors
///
/// Propagates [`Orchestrator::run`] failures.
pub fn play_single_game(matchup: Matchup, seed: u64) -> Result<GameRecord, SimulationError> {
    Orchestrator::from_matchup(matchup, seed).run(|_| {})
}
