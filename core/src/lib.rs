//! Board-state engine and best-time leaderboard for a single-player minesweeper.
//!
//! [`Minefield`] holds the mine layout and adjacency counts of one game,
//! [`PlayEngine`] runs the game on top of it and [`Leaderboard`] keeps the
//! best five runs on disk. [`Controller`] composes them for a front end.

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use leaderboard::*;
pub use minefield::*;
pub use tile::*;
pub use types::*;

mod clock;
mod config;
mod controller;
mod engine;
mod error;
mod generator;
mod leaderboard;
mod minefield;
mod tile;
mod types;
