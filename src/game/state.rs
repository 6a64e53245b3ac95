use super::{evaluate, Board, Column, Outcome, Player};
use crate::error::MoveError;

/// A piece that was just played, kept for the "previous move" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub player: Player,
    pub column: Column,
    pub row: usize,
}

/// Turn-by-turn state owned by a game loop: the live board, whose turn it is
/// and the previous move. The outcome is always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<LastMove>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::starting_with(Player::One)
    }

    /// Empty board with `player` to move first
    pub fn starting_with(player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: player,
            last_move: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Number of pieces played so far
    pub fn moves_played(&self) -> usize {
        self.board.piece_count()
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_over()
    }

    /// Get list of legal columns (not full), empty once the game is over
    pub fn legal_columns(&self) -> Vec<Column> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: Column) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: Column) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(player, column)?;
        self.last_move = Some(LastMove {
            player,
            column,
            row,
        });
        self.current_player = player.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
