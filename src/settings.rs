//! User settings and the directories the game keeps its files in.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::character::Character;
use crate::constants::STARTING_LIVES;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub starting_lives: u32,
    pub muted: bool,
    /// Character preselected in the lobby.
    pub character: String,
    /// Reveal the bullet obstacle once the afternoon theme starts.
    pub bullet_from_afternoon: bool,
    /// Fixed RNG seed for reproducible coin placement.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            muted: false,
            character: Character::default().id().to_string(),
            bullet_from_afternoon: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, using defaults for anything missing.
    pub fn load(path: &Path) -> Self {
        let Ok(s) = fs::read_to_string(path) else {
            return Settings::default();
        };
        serde_json::from_str(&s).unwrap_or_else(|e| {
            warn!(path = %path.display(), "Invalid settings, using defaults: {e}");
            Settings::default()
        })
    }

    pub fn character(&self) -> Character {
        Character::from_id(&self.character)
    }
}

/// File locations under the platform's config and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    pub settings: PathBuf,
    pub scores: PathBuf,
    pub log: PathBuf,
}

impl Paths {
    pub fn locate() -> GameResult<Self> {
        let dirs = ProjectDirs::from("dev", "pipe-runner", "pipe-runner").ok_or(GameError::NoDataDir)?;
        let data = dirs.data_dir();
        fs::create_dir_all(data)?;
        Ok(Self {
            settings: dirs.config_dir().join("settings.json"),
            scores: data.join("scores.json"),
            log: data.join("pipe-runner.log"),
        })
    }
}
