use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, ComputerPlayer, Difficulty};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Column, GameState, LastMove, Outcome, Player};

pub const MENU_ITEMS: [&str; 4] = [
    "View rules",
    "Play a local 2 player game",
    "Play a game against the computer",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Rules,
    DifficultySelect,
    Playing,
    GameOver,
}

struct Opponent {
    cpu: ComputerPlayer,
    side: Player,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    menu_index: usize,
    difficulty: Difficulty,
    game_state: GameState,
    opponent: Option<Opponent>,
    selected_column: Column,
    message: Option<String>,
    result: Option<String>,
    cpu_due: Option<Instant>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            difficulty: config.game.default_difficulty,
            config,
            screen: Screen::Menu,
            menu_index: 0,
            game_state: GameState::initial(),
            opponent: None,
            selected_column: Column::CENTER,
            message: None,
            result: None,
            cpu_due: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Play the computer's move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.cpu_due.is_some_and(|due| due <= now) {
            self.cpu_due = None;
            self.play_cpu_move();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Rules => self.screen = Screen::Menu,
            Screen::DifficultySelect => self.handle_difficulty_key(key.code),
            Screen::Playing => self.handle_game_key(key.code),
            Screen::GameOver => self.back_to_menu(),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_menu_item(self.menu_index),
            KeyCode::Char(c @ '1'..='4') => self.select_menu_item(digit(c) - 1),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn select_menu_item(&mut self, index: usize) {
        self.menu_index = index;
        match index {
            0 => self.screen = Screen::Rules,
            1 => self.start_game(None),
            2 => self.screen = Screen::DifficultySelect,
            _ => self.should_quit = true,
        }
    }

    fn handle_difficulty_key(&mut self, code: KeyCode) {
        let index = Difficulty::ALL
            .iter()
            .position(|&d| d == self.difficulty)
            .unwrap_or(0);
        match code {
            KeyCode::Up | KeyCode::Left => {
                self.difficulty = Difficulty::ALL[index.saturating_sub(1)];
            }
            KeyCode::Down | KeyCode::Right => {
                self.difficulty = Difficulty::ALL[(index + 1).min(Difficulty::ALL.len() - 1)];
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.difficulty = Difficulty::ALL[digit(c) - 1];
                self.start_game(Some(self.difficulty));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start_game(Some(self.difficulty)),
            KeyCode::Esc | KeyCode::Char('q') => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.back_to_menu(),
            KeyCode::Left => {
                let left = self.selected_column.index().checked_sub(1);
                if let Some(column) = left.and_then(Column::from_index) {
                    self.selected_column = column;
                }
            }
            KeyCode::Right => {
                if let Some(column) = Column::from_index(self.selected_column.index() + 1) {
                    self.selected_column = column;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                if let Ok(column) = Column::new(digit(c)) {
                    self.selected_column = column;
                    self.human_move(column);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.selected_column),
            _ => {}
        }
    }

    fn start_game(&mut self, difficulty: Option<Difficulty>) {
        self.game_state = GameState::initial();
        self.selected_column = Column::CENTER;
        self.message = None;
        self.result = None;
        self.cpu_due = None;
        self.opponent = difficulty.map(|difficulty| Opponent {
            cpu: match self.config.cpu.seed {
                Some(seed) => ComputerPlayer::with_seed(difficulty, seed),
                None => ComputerPlayer::new(difficulty),
            },
            side: self.config.game.cpu_player,
        });
        self.screen = Screen::Playing;
        log::info!("new game: {}", self.mode_label());
        self.schedule_cpu();
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.opponent = None;
        self.cpu_due = None;
    }

    /// Whether the computer is the side to move
    pub fn awaiting_cpu(&self) -> bool {
        self.screen == Screen::Playing
            && self
                .opponent
                .as_ref()
                .is_some_and(|o| o.side == self.game_state.current_player())
    }

    fn schedule_cpu(&mut self) {
        if self.awaiting_cpu() {
            let delay = Duration::from_millis(self.config.cpu.move_delay_ms);
            self.cpu_due = Some(Instant::now() + delay);
        }
    }

    fn human_move(&mut self, column: Column) {
        if self.awaiting_cpu() {
            return;
        }
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                self.message = self.game_state.last_move().map(|m| self.describe(m));
                self.after_move();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("That column is full, please try again.".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn play_cpu_move(&mut self) {
        if !self.awaiting_cpu() {
            return;
        }
        let Some(opponent) = self.opponent.as_mut() else {
            return;
        };
        let column = opponent.cpu.select_move(self.game_state.board(), opponent.side);
        if let Err(e) = self.game_state.apply_move_mut(column) {
            log::error!("computer picked column {column}: {e}");
            self.message = Some(e.to_string());
            return;
        }
        if let Some(last) = self.game_state.last_move() {
            let line = self.describe(last);
            self.message = Some(match self.message.take() {
                Some(previous) => format!("{previous}\n{line}"),
                None => line,
            });
        }
        self.after_move();
    }

    fn after_move(&mut self) {
        let outcome = self.game_state.outcome();
        if outcome.is_over() {
            self.finish(outcome);
        } else {
            self.schedule_cpu();
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let cpu_side = self.opponent.as_ref().map(|o| o.side);
        let text = match (outcome, cpu_side) {
            (Outcome::Win(winner), Some(side)) if winner == side => {
                "Bad luck. You lost to the CPU".to_string()
            }
            (Outcome::Win(_), Some(_)) => "You won against the CPU!".to_string(),
            (Outcome::Win(winner), None) => format!("{winner} won!"),
            _ => "It is a draw!".to_string(),
        };
        log::info!("game over after {} moves: {text}", self.game_state.moves_played());
        self.result = Some(text);
        self.cpu_due = None;
        self.screen = Screen::GameOver;
    }

    /// "Player 1 dropped a piece into column 4"
    fn describe(&self, last: LastMove) -> String {
        let is_cpu = self.opponent.as_ref().is_some_and(|o| o.side == last.player);
        let suffix = if is_cpu { " (CPU)" } else { "" };
        format!("{}{suffix} dropped a piece into column {}", last.player, last.column)
    }

    /// Header text describing who is playing
    pub fn mode_label(&self) -> String {
        match &self.opponent {
            Some(o) => format!("vs {} CPU", o.cpu.difficulty()),
            None => "Local 2 player".to_string(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> Column {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// End-of-game line, set once the game is over
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu_view::render_menu(frame, self),
            Screen::Rules => super::menu_view::render_rules(frame),
            Screen::DifficultySelect => super::menu_view::render_difficulty(frame, self),
            Screen::Playing | Screen::GameOver => super::game_view::render(frame, self),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}
