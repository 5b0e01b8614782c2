//! Error types for the runner.

use std::io;

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Please type a nick to start!")]
    EmptyNickname,

    #[error("No home directory to keep scores and settings in")]
    NoDataDir,
}

pub type GameResult<T> = Result<T, GameError>;
