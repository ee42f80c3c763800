use std::path::PathBuf;

/// Errors raised by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {rows}x{cols} (rows and columns must be at least 4)")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors that can occur while loading or saving persisted scores.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("failed to read scores from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scores from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidDimensions { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x7 (rows and columns must be at least 4)"
        );
    }

    #[test]
    fn test_score_error_display() {
        let err = ScoreError::Read {
            path: PathBuf::from("scores.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read scores from scores.json: denied");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 4"
        );
    }
}
