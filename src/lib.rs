//! # Connect Four
//!
//! Connect Four on the standard 6x7 grid with a rule-based computer opponent
//! at three difficulty tiers. Features a terminal UI built with Ratatui and a
//! headless runner for pitting tiers against each other.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, outcome evaluation, turn state
//! - [`ai`]: Pattern probes, the move rule cascade and the difficulty tiers
//! - [`arena`]: Headless games and match statistics between two agents
//! - [`ui`]: Terminal UI: menu, rules, difficulty selection, game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
