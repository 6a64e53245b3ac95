use crate::game::{Board, Column, Player};

/// Universal interface for computer players.
pub trait Agent {
    /// Select a column for `player` on the given board.
    /// The board must still have at least one column that is not full.
    fn select_move(&mut self, board: &Board, player: Player) -> Column;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
