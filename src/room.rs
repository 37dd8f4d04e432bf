//! Room map loading
//!
//! Map files are JSON objects of the form
//! `{"tile_size": 32, "width": 20, "height": 15, "tiles": [[1, 1, ...], ...]}`.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::sim::TileGrid;

/// Read and validate a room's tile grid from a JSON map file
pub fn load_tile_grid(path: &Path) -> Result<TileGrid> {
    let json = fs::read_to_string(path)?;
    let grid: TileGrid = serde_json::from_str(&json)?;
    log::info!(
        "Loaded map {} ({}x{}, tile size {})",
        path.display(),
        grid.width(),
        grid.height(),
        grid.tile_size()
    );
    Ok(grid)
}
