use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::Difficulty;
use connect_four::config::AppConfig;
use connect_four::game::Player;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Difficulty preselected for games against the computer
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Let the computer move first
    #[arg(long)]
    cpu_first: bool,

    /// Pause before the computer's move is shown, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        config.game.default_difficulty = difficulty;
    }
    if cli.cpu_first {
        config.game.cpu_player = Player::One;
    }
    if let Some(delay) = cli.delay_ms {
        config.cpu.move_delay_ms = delay;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = Some(level);
    }
    config.validate().context("invalid settings")?;

    // Log lines would tear the alternate screen, so stay quiet unless asked.
    let level = config.logging.level_or(LevelFilter::Off)?;
    if level != LevelFilter::Off {
        simple_logger::SimpleLogger::new()
            .with_level(level)
            .init()
            .context("installing logger")?;
    }

    run(App::new(config)).context("terminal UI failed")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
