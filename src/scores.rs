//! Win counters kept across sessions in a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::game::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub red: u32,
    pub yellow: u32,
}

impl ScoreBoard {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Yellow => self.yellow += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = ScoreBoard::default();
    }
}

/// Loads and saves a [`ScoreBoard`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored scores; a missing file means no games recorded yet.
    pub fn load(&self) -> Result<ScoreBoard, ScoreError> {
        if !self.path.exists() {
            return Ok(ScoreBoard::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| ScoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ScoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write through a temporary file and rename, so a crash never leaves a
    /// truncated score file behind.
    pub fn save(&self, scores: &ScoreBoard) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(scores)?)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), red = scores.red, yellow = scores.yellow, "scores saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win() {
        let mut scores = ScoreBoard::default();
        scores.record_win(Player::Red);
        scores.record_win(Player::Red);
        scores.record_win(Player::Yellow);
        assert_eq!(scores.get(Player::Red), 2);
        assert_eq!(scores.get(Player::Yellow), 1);

        scores.reset();
        assert_eq!(scores, ScoreBoard::default());
    }

    #[test]
    fn test_missing_file_loads_zeros() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load().unwrap(), ScoreBoard::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nested").join("scores.json"));
        let scores = ScoreBoard { red: 4, yellow: 9 };
        store.save(&scores).unwrap();

        assert_eq!(store.load().unwrap(), scores);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ScoreStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ScoreError::Parse { .. }));
    }

    #[test]
    fn test_json_layout() {
        let json = serde_json::to_string(&ScoreBoard { red: 1, yellow: 2 }).unwrap();
        assert_eq!(json, r#"{"red":1,"yellow":2}"#);
    }
}
