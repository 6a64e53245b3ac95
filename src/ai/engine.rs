use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use super::difficulty::Difficulty;
use super::random::random_column;
use super::rules::Rule;
use crate::game::{Board, Column, Player};

/// A chosen column and the rule that picked it (`None` for the random fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: Column,
    pub rule: Option<Rule>,
}

/// Walk `rules` in order and return the first rule's leftmost matching column.
pub fn decide(board: &Board, player: Player, rules: &[Rule]) -> Option<Decision> {
    rules.iter().find_map(|&rule| {
        rule.first_match(board, player).map(|column| Decision {
            column,
            rule: Some(rule),
        })
    })
}

/// Run the tier's rule cascade, falling back to a random legal column.
///
/// Panics if the board has no open column.
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Decision {
    let decision = decide(board, player, difficulty.rules()).unwrap_or_else(|| Decision {
        column: random_column(board, rng),
        rule: None,
    });
    log::debug!(
        "{difficulty} chose column {} for {player} ({})",
        decision.column,
        decision.rule.map_or("random", Rule::name)
    );
    decision
}

/// [`choose_move_with_rng`] with the thread-local generator.
pub fn choose_move(board: &Board, player: Player, difficulty: Difficulty) -> Column {
    choose_move_with_rng(board, player, difficulty, &mut rand::rng()).column
}

/// Computer opponent at a fixed difficulty.
#[derive(Debug)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    rng: StdRng,
    last_decision: Option<Decision>,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        ComputerPlayer {
            difficulty,
            rng: StdRng::from_os_rng(),
            last_decision: None,
        }
    }

    /// Reproducible random fallback
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        ComputerPlayer {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
            last_decision: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Decision behind the most recent move
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }
}

impl Agent for ComputerPlayer {
    fn select_move(&mut self, board: &Board, player: Player) -> Column {
        let decision = choose_move_with_rng(board, player, self.difficulty, &mut self.rng);
        self.last_decision = Some(decision);
        decision.column
    }

    fn name(&self) -> &str {
        self.difficulty.name()
    }
}
