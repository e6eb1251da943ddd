use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Marker stored in the adjacency grid for mine cells.
const MINE_MARKER: u8 = u8::MAX;

/// Mine layout together with the adjacency counts derived from it.
///
/// Both grids are built in one go by [`Minefield::from_mine_mask`] and never
/// mutated afterwards; a new game builds a new field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Minefield {
    mine_mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl Minefield {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let size = grid_size(&mine_mask);
        let mut adjacent: Array2<u8> = Array2::zeros(size.to_nd_index());
        let mut mine_count = 0;

        for ((row, col), &is_mine) in mine_mask.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            adjacent[coords.to_nd_index()] = if is_mine {
                mine_count += 1;
                MINE_MARKER
            } else {
                // at most 8 neighbors
                mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8
            };
        }

        Self {
            mine_mask,
            adjacent,
            mine_count,
        }
    }

    /// Builds a field of `size` `(rows, cols)` with mines at the given cells.
    ///
    /// Coordinates outside the grid are ignored, duplicates count once. The
    /// resulting layout must still be a valid [`GameConfig`].
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 < size.0 && coords.1 < size.1 {
                mine_mask[coords.to_nd_index()] = true;
            } else {
                log::warn!("Ignoring mine outside of {:?} board at {:?}", size, coords);
            }
        }

        let minefield = Self::from_mine_mask(mine_mask);
        minefield.game_config().validate()?;
        Ok(minefield)
    }

    pub fn game_config(&self) -> GameConfig {
        let (height, width) = self.size();
        GameConfig {
            width,
            height,
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Option<Coord2> {
        let size = self.size();
        (coords.0 < size.0 && coords.1 < size.1).then_some(coords)
    }

    /// Grid shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// `false` outside the grid.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    /// Number of mines around a safe cell, `None` for a mine cell or outside
    /// the grid.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> Option<u8> {
        match *self.adjacent.get(coords.to_nd_index())? {
            MINE_MARKER => None,
            count => Some(count),
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
