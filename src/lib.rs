//! Echoes in the Dark - a top-down stealth prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile collision, actors, enemy AI)
//! - `game`: Fixed timestep driver around the simulation
//! - `room`: Map file loading
//! - `input`: Held keys to movement intent
//! - `persistence`: Key-value JSON saves
//! - `settings`: Data-driven gameplay tuning

pub mod dialogue;
pub mod error;
pub mod game;
pub mod input;
pub mod inventory;
pub mod persistence;
pub mod room;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, GameError, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Tile code that marks a wall in a room's tile grid
    pub const WALL_TILE: i32 = 1;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 150.0;
    pub const PLAYER_SIZE: i32 = 24;
    pub const FLASHLIGHT_LENGTH: f32 = 140.0;
    pub const FLASHLIGHT_WIDTH: f32 = 90.0;
    /// Fraction of the flashlight length where the cone is widest
    pub const FLASHLIGHT_SHOULDER: f32 = 0.6;

    /// Enemy defaults
    pub const ENEMY_PATROL_SPEED: f32 = 80.0;
    pub const ENEMY_CHASE_SPEED: f32 = 120.0;
    pub const ENEMY_DETECTION_RADIUS: f32 = 120.0;
    pub const ENEMY_SIZE: i32 = 24;
    /// Distance under which a patrolling enemy counts a waypoint as reached
    pub const WAYPOINT_ARRIVAL_RADIUS: f32 = 4.0;
}
