use std::path::Path;

use log::LevelFilter;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::Player;

/// Longest pause allowed before a computer move is shown.
pub const MAX_MOVE_DELAY_MS: u64 = 5_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub cpu: CpuConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tier preselected on the difficulty screen
    pub default_difficulty: Difficulty,
    /// Side the computer plays in a game against it
    pub cpu_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            default_difficulty: Difficulty::Medium,
            cpu_player: Player::Two,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    pub move_delay_ms: u64,
    /// Seed for the random fallback; fresh OS entropy when unset
    pub seed: Option<u64>,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            move_delay_ms: 400,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Configured level, or `fallback` when none is set.
    pub fn level_or(&self, fallback: LevelFilter) -> Result<LevelFilter, ConfigError> {
        match &self.level {
            Some(level) => level.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "logging.level must be one of off, error, warn, info, debug, trace (got '{level}')"
                ))
            }),
            None => Ok(fallback),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cpu.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "cpu.move_delay_ms must be <= {MAX_MOVE_DELAY_MS}"
            )));
        }
        self.logging.level_or(LevelFilter::Off)?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
