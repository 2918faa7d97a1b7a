//! High score leaderboard, persisted as JSON through a pluggable store
//!
//! Tracks the top 10 runs. The table itself is pure data; persistence
//! goes through the [`ScoreStore`] trait so tests can swap the on-disk
//! store for an in-memory one.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Storage key under which the table is saved
pub const STORAGE_KEY: &str = "snaketris_high_scores";

/// Player initials are clamped to this many characters
pub const MAX_NAME_LEN: usize = 3;

/// A single finished run on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
    pub lines_cleared: u32,
    pub apples_eaten: u32,
    /// Date achieved, `YYYY-MM-DD`
    pub date: String,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScore>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run. Returns the rank achieved (1-indexed) or
    /// None if it did not qualify. Names longer than three characters
    /// are clamped.
    pub fn record(&mut self, mut entry: HighScore) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        entry.name.truncate(MAX_NAME_LEN);

        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the table from a store; a missing or unreadable key yields an
    /// empty table.
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("high score table unreadable, starting fresh: {}", err);
                    Self::new()
                }
            },
            None => {
                log::info!("no high scores found, starting fresh");
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn ScoreStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(STORAGE_KEY, &json);
                log::info!("high scores saved ({} entries)", self.entries.len());
            }
            Err(err) => log::warn!("failed to serialize high scores: {}", err),
        }
    }
}

/// Key/value persistence backend for the leaderboard
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Store backed by one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            log::warn!("cannot create {}: {}", self.dir.display(), err);
            return;
        }
        if let Err(err) = fs::write(self.path(key), value) {
            log::warn!("cannot write {}: {}", self.path(key).display(), err);
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
