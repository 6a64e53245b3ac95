//! Terminal UI: main menu, rules, difficulty selection and the game screen.

mod app;
pub mod board_widget;
mod game_view;
mod menu_view;

pub use app::{App, Screen, MENU_ITEMS};
