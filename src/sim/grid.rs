//! Room tile grids
//!
//! A tile grid is the static layout of one room: rows of integer tile codes
//! plus the edge length of a tile in world units. Grids are validated once
//! when built, so the rest of the simulation can index them freely.

use serde::{Deserialize, Serialize};

use crate::consts::WALL_TILE;
use crate::error::ConfigError;

/// Map file layout before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTileGrid {
    tile_size: i32,
    width: usize,
    height: usize,
    tiles: Vec<Vec<i32>>,
}

/// A validated rectangular tile grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTileGrid", into = "RawTileGrid")]
pub struct TileGrid {
    tile_size: i32,
    tiles: Vec<Vec<i32>>,
}

impl TileGrid {
    /// Build a grid, rejecting non-positive tile sizes and ragged or empty rows
    pub fn new(tile_size: i32, tiles: Vec<Vec<i32>>) -> Result<Self, ConfigError> {
        if tile_size <= 0 {
            return Err(ConfigError::InvalidTileSize(tile_size));
        }
        let expected = tiles.first().map(Vec::len).ok_or(ConfigError::EmptyTileGrid)?;
        if let Some((row, found)) = tiles
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(ConfigError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        Ok(Self { tile_size, tiles })
    }

    /// Edge length of one tile in world units
    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.tiles[0].len()
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Tile code at (col, row), if inside the grid
    pub fn tile(&self, col: usize, row: usize) -> Option<i32> {
        self.tiles.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_wall(&self, col: usize, row: usize) -> bool {
        self.tile(col, row) == Some(WALL_TILE)
    }

    /// Iterate over (col, row) of every wall tile in row-major order
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter(|&(_, &tile)| tile == WALL_TILE)
                .map(move |(col, _)| (col, row))
        })
    }

    /// World-space size of the whole room
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            self.width() as i32 * self.tile_size,
            self.height() as i32 * self.tile_size,
        )
    }
}

impl TryFrom<RawTileGrid> for TileGrid {
    type Error = ConfigError;

    fn try_from(raw: RawTileGrid) -> Result<Self, Self::Error> {
        let grid = TileGrid::new(raw.tile_size, raw.tiles)?;
        if raw.width != grid.width() {
            return Err(ConfigError::DimensionMismatch {
                axis: "width",
                declared: raw.width,
                actual: grid.width(),
            });
        }
        if raw.height != grid.height() {
            return Err(ConfigError::DimensionMismatch {
                axis: "height",
                declared: raw.height,
                actual: grid.height(),
            });
        }
        Ok(grid)
    }
}

impl From<TileGrid> for RawTileGrid {
    fn from(grid: TileGrid) -> Self {
        Self {
            tile_size: grid.tile_size,
            width: grid.width(),
            height: grid.height(),
            tiles: grid.tiles,
        }
    }
}
