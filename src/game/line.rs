//! Straight lines through the grid, shared by the outcome evaluator and the
//! pattern probes.

use super::{Board, Cell, COLS, ROWS};

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom
    Vertical,
    /// Left to right
    Horizontal,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// `(row, col)` delta of one step along the line
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }

    /// Position `k` steps away from `(row, col)`; `k` may be negative.
    pub fn offset(self, (row, col): (isize, isize), k: isize) -> (isize, isize) {
        let (dr, dc) = self.step();
        (row + dr * k, col + dc * k)
    }

    /// The `len` positions starting at `start`, in step order.
    pub fn cells(self, start: (isize, isize), len: usize) -> impl Iterator<Item = (isize, isize)> {
        (0..len as isize).map(move |k| self.offset(start, k))
    }

    /// Start positions of every `len`-long segment lying fully on the grid.
    pub fn segments(self, len: usize) -> impl Iterator<Item = (isize, isize)> {
        let last = len as isize - 1;
        (0..ROWS as isize)
            .flat_map(|row| (0..COLS as isize).map(move |col| (row, col)))
            .filter(move |&start| {
                let (row, col) = self.offset(start, last);
                in_bounds(row, col)
            })
    }
}

pub fn in_bounds(row: isize, col: isize) -> bool {
    (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
}

/// True if every position lies on the grid and holds `cell`.
pub fn all_match(board: &Board, mut positions: impl Iterator<Item = (isize, isize)>, cell: Cell) -> bool {
    positions.all(|(row, col)| board.cell_at(row, col) == Some(cell))
}
