//! Mutable game state with incremental win detection.

use crate::action::MoveError;
use crate::lines::lines_through;
use crate::types::{Board, Cell, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Complete game state: board, legal moves, side to move and winner.
///
/// `legal_moves` is an unordered set kept in a `Vec` and maintained with
/// swap-remove, so applying a move is O(1) apart from locating the entry.
/// It always holds exactly the empty cells of `board`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    legal_moves: Vec<Position>,
    current_player: Player,
    winner: Option<Player>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            legal_moves: Position::ALL.to_vec(),
            current_player: Player::X,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unplaced positions, in no particular order.
    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Winner of the game, `None` while undecided or after a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Winner as a sentinel: `0` for none or draw, otherwise the winner's sign.
    pub fn winner_sign(&self) -> i32 {
        self.winner.map_or(0, Player::sign)
    }

    /// True once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.legal_moves.is_empty()
    }

    /// Outcome of a finished game, `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.legal_moves.is_empty() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        9 - self.legal_moves.len()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// The move must be legal and the game must not be over. Neither is
    /// checked in release builds; debug builds assert both. Use
    /// [`GameState::try_play`] for untrusted input.
    pub fn apply_move(&mut self, pos: Position) {
        debug_assert!(!self.is_game_over(), "apply_move on a finished game");

        let slot = self.legal_moves.iter().position(|&m| m == pos);
        debug_assert!(slot.is_some(), "apply_move on occupied square {pos:?}");
        if let Some(slot) = slot {
            self.legal_moves.swap_remove(slot);
        }

        let mover = self.current_player;
        self.board.set(pos, Cell::Occupied(mover));

        let mine = Cell::Occupied(mover);
        if lines_through(pos)
            .iter()
            .any(|&[a, b]| self.board.get(a) == mine && self.board.get(b) == mine)
        {
            self.winner = Some(mover);
        }

        self.current_player = mover.opponent();
    }

    /// Reverts the most recent [`GameState::apply_move`], which must have been
    /// for `pos`.
    pub fn undo_move(&mut self, pos: Position) {
        debug_assert!(
            self.board.get(pos) == Cell::Occupied(self.current_player.opponent()),
            "undo_move of {pos:?}, which was not the last move played"
        );

        self.board.set(pos, Cell::Empty);
        self.legal_moves.push(pos);
        self.winner = None;
        self.current_player = self.current_player.opponent();
    }

    /// Applies `pos` and returns a guard that undoes it when dropped.
    ///
    /// The guard derefs to the state, so the position after the move can be
    /// explored through it.
    pub fn scoped_move(&mut self, pos: Position) -> ScopedMove<'_> {
        self.apply_move(pos);
        ScopedMove { state: self, pos }
    }

    /// Validates and applies a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has finished and
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.apply_move(pos);
        debug!(position = %pos, winner = ?self.winner, "Move applied");
        Ok(())
    }

    /// Like [`GameState::try_play`], taking a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices above 8, otherwise the
    /// errors of [`GameState::try_play`].
    #[instrument(skip(self))]
    pub fn try_play_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_play(pos)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A move applied for the lifetime of the guard.
///
/// Dropping the guard undoes the move, on every exit path from the scope that
/// holds it.
#[derive(Debug)]
pub struct ScopedMove<'a> {
    state: &'a mut GameState,
    pos: Position,
}

impl ScopedMove<'_> {
    /// The move this guard applied.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.state.undo_move(self.pos);
    }
}
