//! Decision scenarios for each difficulty tier, played through the public API.

mod common;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{board, col};
use connect_four::ai::{choose_move, choose_move_with_rng, ComputerPlayer, Difficulty, Rule};
use connect_four::arena::play_match;
use connect_four::game::{Board, Player};

#[test]
fn hard_takes_center_after_off_center_opening() {
    let board = board([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "......X",
    ]);
    assert_eq!(choose_move(&board, Player::Two, Difficulty::Hard), col(4));
}

#[test]
fn medium_and_hard_block_the_only_extension() {
    // O has columns 2-4 on the bottom row. Column 5 is already taken by X, so
    // column 1 is the only cell that completes O's four.
    let board = board([
        ".......",
        ".......",
        ".......",
        ".......",
        ".XX....",
        ".OOOX..",
    ]);
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(choose_move(&board, Player::One, difficulty), col(1));
    }
}

#[test]
fn medium_prefers_winning_to_blocking() {
    let board = board([
        ".......",
        ".......",
        ".......",
        "O......",
        "O......",
        "O..XXX.",
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    let decision = choose_move_with_rng(&board, Player::One, Difficulty::Medium, &mut rng);
    assert_eq!(decision.column, col(3));
    assert_eq!(decision.rule, Some(Rule::Win));
}

#[test]
fn easy_is_roughly_uniform_on_empty_board() {
    let board = Board::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..1000 {
        let decision = choose_move_with_rng(&board, Player::One, Difficulty::Easy, &mut rng);
        *counts.entry(decision.column.number()).or_default() += 1;
    }
    assert_eq!(counts.len(), 7);
    for (column, count) in counts {
        // Expected ~143 per column
        assert!((90..=200).contains(&count), "column {column}: {count}");
    }
}

#[test]
fn hard_beats_easy_over_a_match() {
    let mut hard = ComputerPlayer::with_seed(Difficulty::Hard, 17);
    let mut easy = ComputerPlayer::with_seed(Difficulty::Easy, 18);
    let stats = play_match(&mut hard, &mut easy, 40);
    assert_eq!(stats.games(), 40);
    assert!(stats.a_win_rate() >= 0.75, "{stats:?}");
}
