//! High-score persistence.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GameResult;

/// How many scores the board keeps.
pub const BOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub nick: String,
    pub score: u32,
}

/// Where finished sessions are recorded.
pub trait ScoreStore {
    fn submit(&mut self, nick: &str, score: u32) -> GameResult<()>;
    fn best(&self) -> Option<&ScoreEntry>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreBoard {
    #[serde(default)]
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Inserts keeping descending order; older entries win ties.
    fn insert(&mut self, entry: ScoreEntry) {
        let at = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(at, entry);
        self.entries.truncate(BOARD_SIZE);
    }
}

/// Scores kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    board: ScoreBoard,
}

impl MemoryScoreStore {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.board.entries
    }
}

impl ScoreStore for MemoryScoreStore {
    fn submit(&mut self, nick: &str, score: u32) -> GameResult<()> {
        self.board.insert(ScoreEntry {
            nick: nick.to_string(),
            score,
        });
        Ok(())
    }

    fn best(&self) -> Option<&ScoreEntry> {
        self.board.entries.first()
    }
}

/// Scores kept in a JSON file, rewritten atomically on every submit.
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    board: ScoreBoard,
}

impl JsonScoreStore {
    /// Loads the board at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let board = match fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %path.display(), "Ignoring corrupt score file: {e}");
                ScoreBoard::default()
            }),
            Err(_) => ScoreBoard::default(),
        };
        Self { path, board }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.board.entries
    }

    fn save(&self) -> GameResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.board)?)?;
        // rename replaces an existing board in one step
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn submit(&mut self, nick: &str, score: u32) -> GameResult<()> {
        self.board.insert(ScoreEntry {
            nick: nick.to_string(),
            score,
        });
        self.save()?;
        info!(nick, score, "Score saved");
        Ok(())
    }

    fn best(&self) -> Option<&ScoreEntry> {
        self.board.entries.first()
    }
}
