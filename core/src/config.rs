use core::str::FromStr;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::*;

/// Default location of the board configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "board_config.cfg";

/// Board dimensions and mine count, read once when a session starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self { width, height, mines }.validate()
    }

    pub const fn beginner() -> Self {
        Self {
            width: 9,
            height: 9,
            mines: 10,
        }
    }

    /// Checks that the board has at least one cell and at least one safe cell.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::EmptyBoard {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines {
                width: self.width.into(),
                height: self.height.into(),
                mines: self.mines,
            });
        }
        Ok(self)
    }

    /// Grid shape as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Reads `columns rows mines` from a configuration file.
    pub fn load(path: impl AsRef<Path>) -> core::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = contents.parse()?;
        log::debug!("Loaded board configuration {:?} from {}", config, path.display());
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let width = parse_field(&mut fields, "column count")?;
        let height = parse_field(&mut fields, "row count")?;
        let mines = parse_field(&mut fields, "mine count")?;

        Ok(Self::new(width, height, mines)?)
    }
}

fn parse_field<'a, T: FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> core::result::Result<T, ConfigError> {
    let field = fields
        .next()
        .ok_or_else(|| ConfigError::Malformed(format!("missing {name}")))?;
    field
        .parse()
        .map_err(|_| ConfigError::Malformed(format!("bad {name} {field:?}")))
}
