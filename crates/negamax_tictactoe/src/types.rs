//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed sentinel for this side: `+1` for X, `-1` for O.
    ///
    /// Terminal scores are expressed in these units, so a win for the
    /// searching side is worth `+1` and a loss `-1`.
    pub fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell owned by a player.
    Occupied(Player),
}

/// A position on the board, declared in row-major index order (0-8).
///
/// The derived ordering follows the board index, which the search relies on
/// for its lowest-index tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8) of this position.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Zero-based row of this position.
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column of this position.
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a row and a column.
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        self.row() != 1 && self.col() != 1
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Positions of every empty cell, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Formats the board as three rows of `X`, `O` and `.` separated by spaces.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(18);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push('\n');
            } else if i % 3 != 0 {
                result.push(' ');
            }
            result.push(match cell {
                Cell::Empty => '.',
                Cell::Occupied(Player::X) => 'X',
                Cell::Occupied(Player::O) => 'O',
            });
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_position_index_round_trip() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_position_order_matches_index() {
        assert!(Position::TopLeft < Position::Center);
        assert!(Position::Center < Position::BottomRight);
    }

    #[test]
    fn test_corners() {
        let corners: Vec<Position> = Position::iter().filter(|p| p.is_corner()).collect();
        assert_eq!(
            corners,
            [
                Position::TopLeft,
                Position::TopRight,
                Position::BottomLeft,
                Position::BottomRight
            ]
        );
    }

    #[test]
    fn test_player_sign_and_opponent() {
        assert_eq!(Player::X.sign(), 1);
        assert_eq!(Player::O.sign(), -1);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().sign(), 1);
    }

    #[test]
    fn test_board_render() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::X));
        board.set(Position::Center, Cell::Occupied(Player::O));
        assert_eq!(board.render(), "X . .\n. O .\n. . .");
        assert_eq!(board.empty_positions().len(), 7);
    }
}
