use rand::Rng;

use crate::game::{Board, Column, COLS};

/// Pick columns uniformly from 1 to 7 until one is not full.
///
/// Panics if every column is full; the game is already a draw by then.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Column {
    assert!(!board.is_full(), "No legal columns available");
    loop {
        let candidate = Column::from_index(rng.random_range(0..COLS));
        if let Some(column) = candidate.filter(|&column| !board.is_column_full(column)) {
            return column;
        }
    }
}
