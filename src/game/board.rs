use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player whose piece occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A column of the board, numbered 1 to 7 from the left.
///
/// Holding a `Column` means the range check already happened, so the board
/// only ever has to report a full column as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u8);

impl Column {
    /// Bottom-center opening column (number 4)
    pub const CENTER: Column = Column(COLS as u8 / 2);

    /// Validate a 1-based column number.
    pub fn new(number: usize) -> Result<Self, MoveError> {
        if (1..=COLS).contains(&number) {
            Ok(Column((number - 1) as u8))
        } else {
            Err(MoveError::InvalidColumn(number))
        }
    }

    /// Column from a 0-based grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < COLS).then_some(Column(index as u8))
    }

    /// 1-based number, as shown to players
    pub fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// 0-based grid index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All columns in ascending order
    pub fn all() -> impl Iterator<Item = Column> {
        (0..COLS as u8).map(Column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup with signed coordinates, `None` off the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: Column) -> bool {
        self.cells[0][column.index()] != Cell::Empty
    }

    /// Row a piece dropped into `column` would land in
    pub fn lowest_empty_row(&self, column: Column) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column.index()] == Cell::Empty)
    }

    /// Number of empty cells left in a column
    pub fn free_slots(&self, column: Column) -> usize {
        self.lowest_empty_row(column).map_or(0, |row| row + 1)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// A full column is reported as [`MoveError::ColumnFull`] and leaves the
    /// board untouched.
    pub fn drop_piece(&mut self, player: Player, column: Column) -> Result<usize, MoveError> {
        let row = self
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull(column.number()))?;
        self.cells[row][column.index()] = player.to_cell();
        Ok(row)
    }

    /// Copy of the board with one extra piece dropped, plus the landing row.
    pub fn with_piece(&self, player: Player, column: Column) -> Option<(Board, usize)> {
        let mut copy = *self;
        let row = copy.drop_piece(player, column).ok()?;
        Some((copy, row))
    }

    /// Columns that still accept a piece, ascending
    pub fn legal_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::all().filter(|&column| !self.is_column_full(column))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        Column::all().all(|column| self.is_column_full(column))
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = cell.owner().map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{board_from_diagram, col};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for c in 0..COLS {
                assert_eq!(board.get(row, c), Cell::Empty);
            }
        }
        assert!(board.is_empty());
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_column_numbers() {
        assert_eq!(Column::new(1).unwrap().index(), 0);
        assert_eq!(Column::new(7).unwrap().index(), 6);
        assert_eq!(Column::new(0), Err(MoveError::InvalidColumn(0)));
        assert_eq!(Column::new(8), Err(MoveError::InvalidColumn(8)));
        assert_eq!(Column::CENTER.number(), 4);
        assert_eq!(Column::from_index(7), None);
        let numbers: Vec<usize> = Column::all().map(Column::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 4
        let row = board.drop_piece(Player::One, col(4)).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::PlayerOne);

        // Drop second piece in same column
        let row = board.drop_piece(Player::Two, col(4)).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::PlayerTwo);
        assert_eq!(board.free_slots(col(4)), 4);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 1
        for _ in 0..ROWS {
            board.drop_piece(Player::One, col(1)).unwrap();
        }

        assert!(board.is_column_full(col(1)));
        assert_eq!(board.lowest_empty_row(col(1)), None);

        let before = board;
        assert_eq!(
            board.drop_piece(Player::Two, col(1)),
            Err(MoveError::ColumnFull(1))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_with_piece_leaves_original() {
        let board = Board::new();
        let (copy, row) = board.with_piece(Player::Two, col(7)).unwrap();
        assert_eq!(row, 5);
        assert_eq!(copy.get(5, 6), Cell::PlayerTwo);
        assert!(board.is_empty());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in Column::all() {
            for _ in 0..ROWS {
                board.drop_piece(Player::One, column).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.legal_columns().count(), 0);
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_legal_columns() {
        let board = board_from_diagram([
            "X......",
            "O......",
            "X.....O",
            "O.....X",
            "X.....O",
            "O.....X",
        ]);
        let legal: Vec<usize> = board.legal_columns().map(Column::number).collect();
        assert_eq!(legal, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_cell_at_bounds() {
        let board = Board::new();
        assert_eq!(board.cell_at(0, 0), Some(Cell::Empty));
        assert_eq!(board.cell_at(5, 6), Some(Cell::Empty));
        assert_eq!(board.cell_at(-1, 0), None);
        assert_eq!(board.cell_at(0, -1), None);
        assert_eq!(board.cell_at(6, 0), None);
        assert_eq!(board.cell_at(0, 7), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.drop_piece(Player::One, col(1)).unwrap();
        board.drop_piece(Player::Two, col(7)).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().last(), Some("X.....O"));
        assert_eq!(text.lines().count(), ROWS);
    }
}
