//! The computer opponent: pattern probes, the named rule cascade and the
//! difficulty tiers that select from it.

mod agent;
mod difficulty;
mod engine;
pub mod probes;
mod random;
pub mod rules;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use engine::{choose_move, choose_move_with_rng, decide, ComputerPlayer, Decision};
pub use random::random_column;
pub use rules::Rule;
