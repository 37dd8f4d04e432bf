//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Player updates before any enemy reads its position
//! - Collision world is read-only while actors update
//! - No rendering, file, or platform dependencies

pub mod bounds;
pub mod collision;
pub mod enemy;
pub mod grid;
pub mod player;
pub mod state;
pub mod tick;

pub use bounds::BoundingBox;
pub use collision::{CollisionWorld, move_and_collide};
pub use enemy::{Enemy, EnemyState, PatrolRoute, Steering};
pub use grid::TileGrid;
pub use player::Player;
pub use state::{EnemyView, FrameSnapshot, GameState};
pub use tick::{FrameInput, tick};
