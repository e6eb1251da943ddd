use std::io;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },
    #[error("Too many mines: {mines} requested but a {width}x{height} board needs at least one safe cell")]
    TooManyMines { width: u32, height: u32, mines: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure to obtain a usable board configuration; fatal for the session.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read board configuration")]
    Io(#[from] io::Error),
    #[error("Malformed board configuration: {0}")]
    Malformed(String),
    #[error("Invalid board configuration")]
    Invalid(#[from] GameError),
}

/// Failure to persist the leaderboard; the in-memory records stay valid.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Could not write leaderboard")]
    Write(#[from] io::Error),
}
