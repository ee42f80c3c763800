use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ai::Difficulty;
use crate::error::{ConfigError, GameError};
use crate::game::{Player, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
use crate::session::{Session, DEFAULT_LOG_CAPACITY};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    pub enabled: bool,
    pub player: Player,
    pub difficulty: Difficulty,
    /// Pause before the computer replies, so the previous drop stays visible
    pub move_delay_ms: u64,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            enabled: false,
            player: Player::Yellow,
            difficulty: Difficulty::Medium,
            move_delay_ms: 500,
        }
    }
}

impl ComputerConfig {
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub turn_limit_secs: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            turn_limit_secs: 30,
        }
    }
}

impl TimerConfig {
    pub fn turn_limit(&self) -> Duration {
        Duration::from_secs(self.turn_limit_secs)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoresConfig {
    pub path: PathBuf,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        ScoresConfig {
            path: PathBuf::from("connect_four_scores.json"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub computer: ComputerConfig,
    pub timer: TimerConfig,
    pub scores: ScoresConfig,
    pub log: LogConfig,
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
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.cols < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be >= {MIN_DIMENSION}"
            )));
        }
        if self.timer.turn_limit_secs == 0 {
            return Err(ConfigError::Validation(
                "timer.turn_limit_secs must be > 0".into(),
            ));
        }
        if self.log.capacity == 0 {
            return Err(ConfigError::Validation("log.capacity must be > 0".into()));
        }
        if self.scores.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("scores.path must not be empty".into()));
        }

        Ok(())
    }

    /// Side played by the computer, if enabled
    pub fn computer_player(&self) -> Option<Player> {
        self.computer.enabled.then_some(self.computer.player)
    }

    /// Build the first game session described by this configuration.
    pub fn new_session(&self) -> Result<Session, GameError> {
        Ok(Session::new(self.board.rows, self.board.cols)?
            .with_turn_limit(self.timer.turn_limit())
            .with_log_capacity(self.log.capacity)
            .with_computer(self.computer_player()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
