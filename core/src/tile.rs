use serde::{Deserialize, Serialize};

/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
    /// Hidden mine shown only while debug mode is on.
    DebugRevealed,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        !matches!(self, Self::Revealed)
    }

    /// Whether the cell may still be opened or flagged.
    pub const fn is_open_target(self) -> bool {
        matches!(self, Self::Hidden | Self::DebugRevealed)
    }
}

/// What the presentation layer should draw for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    /// Revealed tile with its adjacent mine count.
    Open(u8),
    Flag,
    Mine,
    /// The mine whose reveal lost the game.
    Exploded,
    /// Plain revealed tile with nothing on it, drawn over the whole board while paused.
    Blank,
}
