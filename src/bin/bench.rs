use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use connect_four::ai::{ComputerPlayer, Difficulty};
use connect_four::arena::{play_game, MatchStats};
use connect_four::config::AppConfig;
use connect_four::game::Player;

/// Pit two computer tiers against each other without a UI.
#[derive(Parser)]
#[command(name = "connect-four-bench", about = "Play computer tiers against each other")]
struct Cli {
    /// Tier of contender A
    #[arg(long, value_enum, default_value = "hard")]
    first: Difficulty,

    /// Tier of contender B
    #[arg(long, value_enum, default_value = "easy")]
    second: Difficulty,

    /// Number of games; A moves first in the odd-numbered ones
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Seed for reproducible runs (overrides cpu.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a progress line every N games (0 disables)
    #[arg(long, default_value_t = 25)]
    log_interval: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = Some(level);
    }
    let level = config.logging.level_or(LevelFilter::Warn)?;
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("installing logger")?;

    let (mut a, mut b) = match cli.seed.or(config.cpu.seed) {
        Some(seed) => (
            ComputerPlayer::with_seed(cli.first, seed),
            ComputerPlayer::with_seed(cli.second, seed.wrapping_add(1)),
        ),
        None => (
            ComputerPlayer::new(cli.first),
            ComputerPlayer::new(cli.second),
        ),
    };

    println!(
        "Playing {} games: A = {} vs B = {}",
        cli.games, cli.first, cli.second
    );
    println!("-------------------------------------------");

    let mut stats = MatchStats::new();
    for game in 1..=cli.games {
        let a_side = if game % 2 == 1 { Player::One } else { Player::Two };
        let result = match a_side {
            Player::One => play_game(&mut a, &mut b),
            Player::Two => play_game(&mut b, &mut a),
        };
        log::info!("game {game}: A played {a_side}, {result:?}");
        stats.record(result, a_side);

        if cli.log_interval > 0 && game % cli.log_interval == 0 {
            println!(
                "Game {}/{} | A: {:.1}% | B: {:.1}% | draw: {:.1}% | avg_len: {:.1}",
                game,
                cli.games,
                stats.a_win_rate() * 100.0,
                stats.b_win_rate() * 100.0,
                stats.draw_rate() * 100.0,
                stats.average_game_length(),
            );
        }
    }

    println!("-------------------------------------------");
    println!(
        "{} wins: {}  |  {} wins: {}  |  draws: {}",
        cli.first,
        stats.a_wins(),
        cli.second,
        stats.b_wins(),
        stats.draws()
    );
    println!("Average game length: {:.1} moves", stats.average_game_length());
    Ok(())
}
