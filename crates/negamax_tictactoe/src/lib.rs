//! Tic-tac-toe game logic and exhaustive negamax search.
//!
//! # Architecture
//!
//! - **Types**: players, cells, board positions and the board itself
//! - **Lines**: compile-time table of the lines passing through each cell
//! - **State**: mutable game state with apply/undo and incremental win detection
//! - **Search**: full-tree negamax returning a move at the root and a score below it
//!
//! # Example
//!
//! ```
//! use negamax_tictactoe::{GameState, Negamax, Position};
//!
//! let state = GameState::new();
//! let mut search = Negamax::new();
//! assert_eq!(search.best_move(&state), Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod lines;
mod search;
mod state;
mod types;

pub use action::MoveError;
pub use lines::{lines_through, CellLines, LINES_TO_CHECK};
pub use search::Negamax;
pub use state::{GameState, ScopedMove};
pub use types::{Board, Cell, Outcome, Player, Position};
