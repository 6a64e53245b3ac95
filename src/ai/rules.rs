//! Named move rules for the computer opponent.
//!
//! Each rule is a predicate over `(board, mover, column)` that simulates one
//! drop on a copy of the board. A tier is an ordered slice of rules; the first
//! rule with a matching column decides the move.

use std::fmt;

use super::probes::{
    completes_four, double_threat_through, hands_opponent_win, open_three_through,
    open_two_through,
};
use crate::game::{Board, Column, Player, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// First move of either side goes to bottom-center
    Opening,
    /// Complete four for the mover
    Win,
    /// Take the cell that would complete four for the opponent
    BlockWin,
    /// Take the cell that would give the opponent a three open at both ends
    BlockDoubleThreat,
    /// Make an open three
    OpenThree,
    /// Take the cell that would give the opponent an open three
    BlockOpenThree,
    /// Make an open two
    OpenTwo,
    /// Take the cell that would give the opponent an open two
    BlockOpenTwo,
}

impl Rule {
    /// The hard tier, in priority order
    pub const CASCADE: [Rule; 8] = [
        Rule::Opening,
        Rule::Win,
        Rule::BlockWin,
        Rule::BlockDoubleThreat,
        Rule::OpenThree,
        Rule::BlockOpenThree,
        Rule::OpenTwo,
        Rule::BlockOpenTwo,
    ];

    /// Whether playing `column` for `player` satisfies this rule.
    ///
    /// Full columns never match.
    pub fn matches(self, board: &Board, player: Player, column: Column) -> bool {
        if board.is_column_full(column) {
            return false;
        }
        let opponent = player.other();
        match self {
            Rule::Opening => is_opening(board) && column == Column::CENTER,
            Rule::Win => completes_four(board, player, column),
            Rule::BlockWin => completes_four(board, opponent, column),
            Rule::BlockDoubleThreat => {
                creates(board, opponent, column, double_threat_through)
                    && self.not_vetoed(board, player, column)
            }
            Rule::OpenThree => {
                creates(board, player, column, open_three_through)
                    && self.not_vetoed(board, player, column)
            }
            Rule::BlockOpenThree => creates(board, opponent, column, open_three_through),
            Rule::OpenTwo => {
                creates(board, player, column, open_two_through)
                    && self.not_vetoed(board, player, column)
            }
            Rule::BlockOpenTwo => creates(board, opponent, column, open_two_through),
        }
    }

    /// First column, left to right, that satisfies this rule
    pub fn first_match(self, board: &Board, player: Player) -> Option<Column> {
        Column::all().find(|&column| self.matches(board, player, column))
    }

    fn not_vetoed(self, board: &Board, player: Player, column: Column) -> bool {
        let vetoed = hands_opponent_win(board, player, column);
        if vetoed {
            log::trace!("{self}: column {column} would hand {} a win", player.other());
        }
        !vetoed
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Opening => "opening",
            Rule::Win => "win",
            Rule::BlockWin => "block win",
            Rule::BlockDoubleThreat => "block double threat",
            Rule::OpenThree => "open three",
            Rule::BlockOpenThree => "block open three",
            Rule::OpenTwo => "open two",
            Rule::BlockOpenTwo => "block open two",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nobody has claimed bottom-center and at most one piece is down.
fn is_opening(board: &Board) -> bool {
    board.piece_count() <= 1 && board.get(ROWS - 1, Column::CENTER.index()).is_empty()
}

/// Drop `player` into `column` on a copy and run an anchored probe on the
/// cell the piece landed in.
fn creates(
    board: &Board,
    player: Player,
    column: Column,
    probe: fn(&Board, Player, (usize, usize)) -> bool,
) -> bool {
    board
        .with_piece(player, column)
        .is_some_and(|(after, row)| probe(&after, player, (row, column.index())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{board_from_diagram, col};

    #[test]
    fn test_opening_only_on_center() {
        let board = Board::new();
        assert!(Rule::Opening.matches(&board, Player::One, col(4)));
        assert!(!Rule::Opening.matches(&board, Player::One, col(3)));
        assert_eq!(Rule::Opening.first_match(&board, Player::One), Some(col(4)));
    }

    #[test]
    fn test_opening_after_off_center_reply() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "X......",
        ]);
        assert_eq!(Rule::Opening.first_match(&board, Player::Two), Some(col(4)));
    }

    #[test]
    fn test_opening_not_when_center_taken() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...X...",
        ]);
        assert_eq!(Rule::Opening.first_match(&board, Player::Two), None);
    }

    #[test]
    fn test_opening_not_later_in_game() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XO.....",
        ]);
        assert_eq!(Rule::Opening.first_match(&board, Player::One), None);
    }

    #[test]
    fn test_win_and_block() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            "O......",
            "O......",
            "O...XXX",
        ]);
        assert_eq!(Rule::Win.first_match(&board, Player::One), Some(col(4)));
        assert_eq!(Rule::BlockWin.first_match(&board, Player::One), Some(col(1)));
        assert_eq!(Rule::Win.first_match(&board, Player::Two), Some(col(1)));
    }

    #[test]
    fn test_full_column_never_matches() {
        let board = board_from_diagram([
            "O......",
            "X......",
            "O......",
            "X......",
            "O......",
            "X......",
        ]);
        for rule in Rule::CASCADE {
            assert!(!rule.matches(&board, Player::One, col(1)), "{rule}");
        }
    }

    #[test]
    fn test_block_double_threat() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            "..XX...",
            "..OO...",
        ]);
        assert_eq!(
            Rule::BlockDoubleThreat.first_match(&board, Player::One),
            Some(col(2))
        );
    }

    #[test]
    fn test_open_three_vetoed_when_it_hands_a_win() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            "X......",
            "OOO....",
            "OXX...X",
        ]);
        // Column 4 makes X X X on the bottom row but O then wins on top of it.
        assert!(open_three_through(
            &board.with_piece(Player::One, col(4)).unwrap().0,
            Player::One,
            (5, 3)
        ));
        assert!(!Rule::OpenThree.matches(&board, Player::One, col(4)));
        assert_eq!(Rule::OpenThree.first_match(&board, Player::One), None);
    }

    #[test]
    fn test_open_two_and_block_open_two() {
        // An O pair on the bottom row is boxed in by X, so the block is the
        // vertical pair above column 3.
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..OX...",
        ]);
        assert_eq!(Rule::OpenTwo.first_match(&board, Player::One), Some(col(3)));
        assert_eq!(
            Rule::BlockOpenTwo.first_match(&board, Player::One),
            Some(col(3))
        );
    }
}
