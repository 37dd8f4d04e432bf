//! Error types for room loading, actor construction, and persistence.

use thiserror::Error;

/// Load-time configuration faults. Surfaced to the driver, never recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("patrol route must contain at least one waypoint")]
    EmptyPatrolRoute,

    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(i32),

    #[error("tile grid has no rows")]
    EmptyTileGrid,

    #[error("tile grid row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("declared {axis} {declared} does not match tile grid {axis} {actual}")]
    DimensionMismatch {
        axis: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("{actor} spawn at ({x}, {y}) is inside a wall")]
    SpawnInWall { actor: &'static str, x: i32, y: i32 },
}

/// Errors surfaced to the game driver.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
