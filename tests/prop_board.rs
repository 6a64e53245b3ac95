//! Property-based tests for the board, the outcome evaluator and the
//! decision engine over random move sequences.

mod common;

use proptest::prelude::*;

use common::replay;
use connect_four::ai::probes::hands_opponent_win;
use connect_four::ai::{choose_move_with_rng, Difficulty, Rule};
use connect_four::error::MoveError;
use connect_four::game::{evaluate, has_four, Board, Cell, Column, Outcome, Player, COLS, ROWS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..COLS, 0..64)
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

/// No piece sits above an empty cell.
fn gravity_holds(board: &Board) -> bool {
    (0..COLS).all(|c| {
        (1..ROWS).all(|row| board.get(row - 1, c).is_empty() || !board.get(row, c).is_empty())
    })
}

proptest! {
    /// A drop fills exactly the lowest empty cell of its column.
    #[test]
    fn prop_drop_fills_lowest_empty(sequence in moves(), index in 0usize..COLS) {
        let state = replay(&sequence);
        let before = *state.board();
        let column = Column::from_index(index).unwrap();
        let player = state.current_player();

        let mut after = before;
        match before.lowest_empty_row(column) {
            Some(row) => {
                prop_assert_eq!(after.drop_piece(player, column), Ok(row));
                for r in 0..ROWS {
                    for c in 0..COLS {
                        let expected = if (r, c) == (row, index) {
                            player.to_cell()
                        } else {
                            before.get(r, c)
                        };
                        prop_assert_eq!(after.get(r, c), expected);
                    }
                }
            }
            None => {
                prop_assert_eq!(
                    after.drop_piece(player, column),
                    Err(MoveError::ColumnFull(column.number()))
                );
                prop_assert_eq!(after, before);
            }
        }
        prop_assert!(gravity_holds(&after));
    }

    /// The evaluator agrees with the four-in-a-row scan and is repeatable.
    #[test]
    fn prop_evaluate_consistent(sequence in moves()) {
        let state = replay(&sequence);
        let board = state.board();
        let outcome = evaluate(board);
        prop_assert_eq!(evaluate(board), outcome);
        prop_assert_eq!(state.outcome(), outcome);

        match outcome {
            Outcome::Win(player) => prop_assert!(has_four(board, player)),
            Outcome::Draw => {
                prop_assert!(board.is_full());
                prop_assert!(!has_four(board, Player::One));
                prop_assert!(!has_four(board, Player::Two));
            }
            Outcome::InProgress => {
                prop_assert!(!board.is_full());
                prop_assert!(state.legal_columns().iter().all(|&c| !board.is_column_full(c)));
            }
        }
    }

    /// The piece count always matches the number of accepted moves.
    #[test]
    fn prop_piece_count_matches_moves(sequence in moves()) {
        let state = replay(&sequence);
        let board = state.board();
        let occupied = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| board.get(r, c) != Cell::Empty)
            .count();
        prop_assert_eq!(occupied, state.moves_played());
        prop_assert!(gravity_holds(board));
    }

    /// Every tier returns an open column, and the self-made patterns the hard
    /// tier plays never hand the opponent an immediate win.
    #[test]
    fn prop_engine_picks_open_column(
        sequence in moves(),
        difficulty in difficulty(),
        seed in any::<u64>()
    ) {
        let state = replay(&sequence);
        if state.board().is_full() {
            return Ok(());
        }

        let board = state.board();
        let player = state.current_player();
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = choose_move_with_rng(board, player, difficulty, &mut rng);

        prop_assert!(!board.is_column_full(decision.column));
        if let Some(rule) = decision.rule {
            prop_assert!(difficulty.rules().contains(&rule));
            prop_assert!(rule.matches(board, player, decision.column));
            if matches!(rule, Rule::BlockDoubleThreat | Rule::OpenThree | Rule::OpenTwo) {
                prop_assert!(!hands_opponent_win(board, player, decision.column));
            }
        }
    }

    /// Medium and Hard never miss an immediate win.
    #[test]
    fn prop_win_is_never_missed(sequence in moves(), seed in any::<u64>()) {
        let state = replay(&sequence);
        let board = state.board();
        let player = state.current_player();
        let Some(winning) = Rule::Win.first_match(board, player) else {
            return Ok(());
        };

        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = choose_move_with_rng(board, player, difficulty, &mut rng);
            prop_assert_eq!(decision.rule, Some(Rule::Win));
            prop_assert_eq!(decision.column, winning);
        }
    }
}
