//! Win and draw detection over a whole board.

use super::line::{all_match, Orientation, WIN_LENGTH};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Check if the game is over
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Evaluate a board.
///
/// Every orientation is scanned before declaring that nobody has won, and a
/// four-in-a-row is reported even when the board is also full.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = find_four(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Owner of the first four-in-a-row found, if any
fn find_four(board: &Board) -> Option<Player> {
    Orientation::ALL.into_iter().find_map(|orientation| {
        orientation.segments(WIN_LENGTH).find_map(|start| {
            let (row, col) = start;
            let owner = board.cell_at(row, col)?.owner()?;
            all_match(board, orientation.cells(start, WIN_LENGTH), owner.to_cell()).then_some(owner)
        })
    })
}

/// Check if `player` has four in a row anywhere
pub fn has_four(board: &Board, player: Player) -> bool {
    Orientation::ALL.into_iter().any(|orientation| {
        orientation
            .segments(WIN_LENGTH)
            .any(|start| all_match(board, orientation.cells(start, WIN_LENGTH), player.to_cell()))
    })
}
