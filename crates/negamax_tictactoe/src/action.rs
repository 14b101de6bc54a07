//! Errors for checked move application.
//!
//! [`GameState::apply_move`](crate::GameState::apply_move) trusts its caller.
//! Input that comes from outside the engine goes through
//! [`GameState::try_play`](crate::GameState::try_play) instead, which reports
//! these errors rather than corrupting the state.

use crate::types::Position;

/// Error that can occur when validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}
