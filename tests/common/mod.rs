#![allow(dead_code)]

use connect_four::game::{Board, Column, GameState, Player, COLS, ROWS};

pub fn col(number: usize) -> Column {
    Column::new(number).unwrap()
}

/// Board from a top-to-bottom picture using `X`, `O` and `.`.
pub fn board(rows: [&str; ROWS]) -> Board {
    let mut board = Board::new();
    for c in 0..COLS {
        let column = Column::from_index(c).unwrap();
        for row in (0..ROWS).rev() {
            let player = match rows[row].as_bytes()[c] {
                b'X' => Player::One,
                b'O' => Player::Two,
                _ => continue,
            };
            let landed = board.drop_piece(player, column).unwrap();
            assert_eq!(landed, row, "floating piece in column {column}");
        }
    }
    board
}

/// Play `indices` (0-based, wrapped into range) from the initial state,
/// skipping full columns and stopping once the game is over.
pub fn replay(indices: &[usize]) -> GameState {
    let mut state = GameState::initial();
    for &index in indices {
        if state.is_terminal() {
            break;
        }
        let column = Column::from_index(index % COLS).unwrap();
        let _ = state.apply_move_mut(column);
    }
    state
}
