//! Headless games between two agents, used by the bench binary and the
//! integration tests.

use crate::ai::Agent;
use crate::game::{GameState, Player};

/// How a finished game went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub length: usize,
}

/// Play one game to the end. `one` plays [`Player::One`] and moves first.
///
/// Panics if an agent picks a full column.
pub fn play_game(one: &mut dyn Agent, two: &mut dyn Agent) -> GameResult {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let column = agent.select_move(state.board(), player);
        state = state.apply_move(column).unwrap_or_else(|e| {
            panic!(
                "{} picked column {column} ({e}), legal: {:?}",
                agent.name(),
                state.legal_columns()
            )
        });
    }

    let result = GameResult {
        winner: state.outcome().winner(),
        length: state.moves_played(),
    };
    log::debug!("{} vs {}: {result:?}", one.name(), two.name());
    result
}

/// Running totals for a series of games between contenders A and B.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    a_wins: usize,
    b_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game in which A played `a_side`.
    pub fn record(&mut self, result: GameResult, a_side: Player) {
        match result.winner {
            Some(winner) if winner == a_side => self.a_wins += 1,
            Some(_) => self.b_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += result.length;
    }

    pub fn games(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }

    pub fn a_wins(&self) -> usize {
        self.a_wins
    }

    pub fn b_wins(&self) -> usize {
        self.b_wins
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Share of games A won
    pub fn a_win_rate(&self) -> f32 {
        self.rate(self.a_wins)
    }

    pub fn b_win_rate(&self) -> f32 {
        self.rate(self.b_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    fn rate(&self, count: usize) -> f32 {
        match self.games() {
            0 => 0.0,
            n => count as f32 / n as f32,
        }
    }
}

/// Play `games` games between `a` and `b`, with A moving first in the even
/// numbered games.
pub fn play_match(a: &mut dyn Agent, b: &mut dyn Agent, games: usize) -> MatchStats {
    let mut stats = MatchStats::new();
    for game_idx in 0..games {
        let (result, a_side) = if game_idx % 2 == 0 {
            (play_game(a, b), Player::One)
        } else {
            (play_game(b, a), Player::Two)
        };
        stats.record(result, a_side);
    }
    stats
}
