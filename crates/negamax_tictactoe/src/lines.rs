//! Precomputed winning lines through each cell.
//!
//! After a move only the lines through the played cell can have changed, so
//! win detection looks up this table instead of scanning all eight lines.
//! Each entry stores the *other two* cells of a line.

use crate::types::Position;

/// The lines passing through one cell: row, column, then any diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLines {
    lines: [[Position; 2]; 4],
    len: usize,
}

impl CellLines {
    const EMPTY: Self = Self {
        lines: [[Position::TopLeft; 2]; 4],
        len: 0,
    };

    /// The lines as pairs of companion cells.
    pub fn as_slice(&self) -> &[[Position; 2]] {
        &self.lines[..self.len]
    }
}

/// Lines to check for each cell, indexed by board index.
///
/// Edges sit on 2 lines, corners on 3 and the center on 4.
pub static LINES_TO_CHECK: [CellLines; 9] = compute_lines_to_check();

/// Companion cells of every line through `pos`.
pub fn lines_through(pos: Position) -> &'static [[Position; 2]] {
    LINES_TO_CHECK[pos.index()].as_slice()
}

const fn at(index: usize) -> Position {
    Position::ALL[index]
}

/// The two cells of line `[a, b, c]` other than `cell`.
const fn companions(line: [usize; 3], cell: usize) -> [Position; 2] {
    let mut out = [Position::TopLeft; 2];
    let mut n = 0;
    let mut k = 0;
    while k < 3 {
        if line[k] != cell {
            out[n] = at(line[k]);
            n += 1;
        }
        k += 1;
    }
    out
}

const fn compute_lines_to_check() -> [CellLines; 9] {
    let mut table = [CellLines::EMPTY; 9];
    let mut cell = 0;
    while cell < 9 {
        let row = cell / 3;
        let col = cell % 3;
        let mut entry = CellLines::EMPTY;

        entry.lines[entry.len] = companions([row * 3, row * 3 + 1, row * 3 + 2], cell);
        entry.len += 1;
        entry.lines[entry.len] = companions([col, col + 3, col + 6], cell);
        entry.len += 1;

        if row == col {
            entry.lines[entry.len] = companions([0, 4, 8], cell);
            entry.len += 1;
        }
        if row + col == 2 {
            entry.lines[entry.len] = companions([2, 4, 6], cell);
            entry.len += 1;
        }

        table[cell] = entry;
        cell += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts_per_cell() {
        let counts: Vec<usize> = Position::ALL
            .iter()
            .map(|&pos| lines_through(pos).len())
            .collect();
        assert_eq!(counts, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_companions_exclude_cell() {
        for pos in Position::ALL {
            for [a, b] in lines_through(pos) {
                assert_ne!(*a, pos);
                assert_ne!(*b, pos);
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_center_lines() {
        assert_eq!(
            lines_through(Position::Center),
            [
                [Position::MiddleLeft, Position::MiddleRight],
                [Position::TopCenter, Position::BottomCenter],
                [Position::TopLeft, Position::BottomRight],
                [Position::TopRight, Position::BottomLeft],
            ]
        );
    }

    #[test]
    fn test_table_covers_all_eight_lines() {
        let mut lines: Vec<[usize; 3]> = Position::ALL
            .iter()
            .flat_map(|&pos| {
                lines_through(pos).iter().map(move |[a, b]| {
                    let mut line = [pos.index(), a.index(), b.index()];
                    line.sort_unstable();
                    line
                })
            })
            .collect();
        lines.sort_unstable();
        lines.dedup();
        assert_eq!(lines.len(), 8);
    }
}
