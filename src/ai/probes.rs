//! Geometric predicates the rule cascade uses to score candidate columns.
//!
//! All probes are pure functions of a board snapshot. Runs are found with the
//! same segment walk as the outcome evaluator, so both diagonal directions go
//! through identical code and nothing ever indexes off the grid.

use crate::game::{has_four, Board, Cell, Column, Orientation, Player, WIN_LENGTH};

/// Orientations in which a double threat can lie. A vertical run can only
/// ever be completed from above.
const DOUBLE_THREAT_ORIENTATIONS: [Orientation; 3] = [
    Orientation::Horizontal,
    Orientation::DiagonalDown,
    Orientation::DiagonalUp,
];

/// `len` consecutive pieces of one player along one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: (isize, isize),
    orientation: Orientation,
    len: usize,
}

impl Run {
    /// Cell just before the first piece
    fn before(&self) -> (isize, isize) {
        self.orientation.offset(self.start, -1)
    }

    /// Cell just after the last piece
    fn after(&self) -> (isize, isize) {
        self.orientation.offset(self.start, self.len as isize)
    }

    fn contains(&self, (row, col): (usize, usize)) -> bool {
        self.orientation
            .cells(self.start, self.len)
            .any(|pos| pos == (row as isize, col as isize))
    }
}

fn is_empty_at(board: &Board, (row, col): (isize, isize)) -> bool {
    board.cell_at(row, col) == Some(Cell::Empty)
}

/// Every run of exactly `len` cells owned by `player`, in the given
/// orientations. Longer lines show up as several overlapping runs.
fn runs<'a>(
    board: &'a Board,
    player: Player,
    len: usize,
    orientations: &'a [Orientation],
) -> impl Iterator<Item = Run> + 'a {
    orientations.iter().flat_map(move |&orientation| {
        orientation
            .segments(len)
            .filter(move |&start| {
                orientation
                    .cells(start, len)
                    .all(|(row, col)| board.cell_at(row, col) == Some(player.to_cell()))
            })
            .map(move |start| Run {
                start,
                orientation,
                len,
            })
    })
}

/// Some four-cell window on the grid covers the run and holds no opponent piece.
fn has_room(board: &Board, player: Player, run: &Run) -> bool {
    let blocker = player.other().to_cell();
    let slack = (WIN_LENGTH - run.len) as isize;
    (-slack..=0).any(|shift| {
        let start = run.orientation.offset(run.start, shift);
        run.orientation
            .cells(start, WIN_LENGTH)
            .all(|(row, col)| matches!(board.cell_at(row, col), Some(cell) if cell != blocker))
    })
}

/// An adjacent empty cell extends the run and it can still grow to four.
fn is_open(board: &Board, player: Player, run: &Run) -> bool {
    let extendable = is_empty_at(board, run.before()) || is_empty_at(board, run.after());
    extendable && has_room(board, player, run)
}

/// Both ends empty: two distinct cells would complete four.
fn is_double_ended(board: &Board, run: &Run) -> bool {
    is_empty_at(board, run.before()) && is_empty_at(board, run.after())
}

fn open_run(board: &Board, player: Player, len: usize, through: Option<(usize, usize)>) -> bool {
    runs(board, player, len, &Orientation::ALL)
        .filter(|run| through.map_or(true, |pos| run.contains(pos)))
        .any(|run| is_open(board, player, &run))
}

/// Three in a row with an empty cell next to it that would make four.
pub fn open_three(board: &Board, player: Player) -> bool {
    open_run(board, player, 3, None)
}

/// Like [`open_three`], counting only runs that pass through `(row, col)`.
pub fn open_three_through(board: &Board, player: Player, pos: (usize, usize)) -> bool {
    open_run(board, player, 3, Some(pos))
}

/// Two in a row with an adjacent empty cell and room to reach four.
pub fn open_two(board: &Board, player: Player) -> bool {
    open_run(board, player, 2, None)
}

/// Like [`open_two`], counting only runs that pass through `(row, col)`.
pub fn open_two_through(board: &Board, player: Player, pos: (usize, usize)) -> bool {
    open_run(board, player, 2, Some(pos))
}

fn double_threat_run(board: &Board, player: Player, through: Option<(usize, usize)>) -> bool {
    runs(board, player, 3, &DOUBLE_THREAT_ORIENTATIONS)
        .filter(|run| through.map_or(true, |pos| run.contains(pos)))
        .any(|run| is_double_ended(board, &run))
}

/// `player` holds a horizontal or diagonal three with both ends empty, so
/// blocking one end still leaves the other.
pub fn double_threat(board: &Board, player: Player) -> bool {
    double_threat_run(board, player, None)
}

/// Like [`double_threat`], counting only runs that pass through `(row, col)`.
pub fn double_threat_through(board: &Board, player: Player, pos: (usize, usize)) -> bool {
    double_threat_run(board, player, Some(pos))
}

/// Dropping a piece of `player` into `column` wins on the spot.
pub fn completes_four(board: &Board, player: Player, column: Column) -> bool {
    board
        .with_piece(player, column)
        .is_some_and(|(after, _)| has_four(&after, player))
}

/// After `player` drops into `column`, the opponent wins by dropping on top.
pub fn hands_opponent_win(board: &Board, player: Player, column: Column) -> bool {
    board
        .with_piece(player, column)
        .is_some_and(|(after, _)| completes_four(&after, player.other(), column))
}
