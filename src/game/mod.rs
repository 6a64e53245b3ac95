//! Core Connect Four game logic: board representation, player types, win and
//! draw detection, and the turn-by-turn game state.

mod board;
mod line;
mod outcome;
mod player;
mod state;

pub use board::{Board, Cell, Column, COLS, ROWS};
pub use line::{Orientation, WIN_LENGTH};
pub use outcome::{evaluate, has_four, Outcome};
pub use player::Player;
pub use state::{GameState, LastMove};
