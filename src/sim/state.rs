//! Game state and render snapshots
//!
//! Everything a frame reads or writes lives in `GameState`. Rendering only
//! ever sees a `FrameSnapshot` taken after all actors have updated.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::bounds::BoundingBox;
use super::collision::CollisionWorld;
use super::enemy::{Enemy, EnemyState, PatrolRoute};
use super::grid::TileGrid;
use super::player::Player;
use crate::error::ConfigError;
use crate::inventory::Inventory;
use crate::persistence::SaveData;
use crate::settings::{EnemyTuning, Settings};

/// Player spawn point: top-left of tile (2, 2)
fn player_spawn(grid: &TileGrid) -> Vec2 {
    Vec2::splat(grid.tile_size() as f32 * 2.0)
}

/// One enemy at tile (w-4, h-4), patrolling two tiles to the left and back
fn default_enemies(grid: &TileGrid, tuning: &EnemyTuning) -> Result<Vec<Enemy>, ConfigError> {
    let tile = grid.tile_size() as f32;
    let (width, height) = (grid.width() as f32, grid.height() as f32);

    let start = Vec2::new(tile * (width - 4.0), tile * (height - 4.0));
    let route = PatrolRoute::new(vec![start, Vec2::new(tile * (width - 6.0), start.y)])?;
    Ok(vec![Enemy::with_tuning(start, route, tuning)])
}

/// Reject a spawn whose box starts inside a wall
fn check_spawn(
    world: &CollisionWorld,
    bounds: BoundingBox,
    actor: &'static str,
) -> Result<(), ConfigError> {
    if world.intersects_any(&bounds) {
        return Err(ConfigError::SpawnInWall {
            actor,
            x: bounds.x,
            y: bounds.y,
        });
    }
    Ok(())
}

/// Per-enemy view for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub bounds: BoundingBox,
    pub state: EnemyState,
    /// Whether the enemy's center is inside the player's flashlight cone
    pub lit: bool,
}

/// Read-only view of one frame for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub player_position: Vec2,
    pub player_bounds: BoundingBox,
    pub facing: Vec2,
    /// Flashlight kite `[center, left, tip, right]`
    pub flashlight: [Vec2; 4],
    pub enemies: Vec<EnemyView>,
}

/// Complete simulation state for the current room
#[derive(Debug, Clone)]
pub struct GameState {
    /// Layout of the current room
    pub grid: TileGrid,
    /// Walls of the current room (rebuilt only by `load_room`)
    pub world: CollisionWorld,
    pub player: Player,
    /// Enemies in update order
    pub enemies: Vec<Enemy>,
    pub inventory: Inventory,
    /// Simulation frame counter
    pub frame: u64,
}

impl GameState {
    /// Create a room with the default layout: the player near the top-left
    /// and one enemy patrolling near the bottom-right
    ///
    /// Fails if either spawn point is inside a wall.
    pub fn new(grid: TileGrid, settings: &Settings) -> Result<Self, ConfigError> {
        let player = Player::with_tuning(player_spawn(&grid), &settings.player);
        let enemies = default_enemies(&grid, &settings.enemy)?;

        let state = Self::with_actors(grid, player, enemies);
        state.check_spawns()?;
        Ok(state)
    }

    /// Create a room with explicitly placed actors
    pub fn with_actors(grid: TileGrid, player: Player, enemies: Vec<Enemy>) -> Self {
        let world = CollisionWorld::from_grid(&grid);
        log::info!(
            "Room {}x{} loaded with {} obstacles",
            grid.width(),
            grid.height(),
            world.obstacles().len()
        );
        Self {
            grid,
            world,
            player,
            enemies,
            inventory: Inventory::default(),
            frame: 0,
        }
    }

    /// Swap in a new room layout, rebuilding the collision world
    ///
    /// The player moves to the new room's spawn point (keeping facing and
    /// tuning) and the enemies are replaced by the room's default patrol.
    /// On error the current room is left untouched.
    pub fn load_room(&mut self, grid: TileGrid, settings: &Settings) -> Result<(), ConfigError> {
        let world = CollisionWorld::from_grid(&grid);
        let mut player = self.player.clone();
        player.position = player_spawn(&grid);
        let enemies = default_enemies(&grid, &settings.enemy)?;

        check_spawn(&world, player.bounding_box(), "player")?;
        for enemy in &enemies {
            check_spawn(&world, enemy.bounding_box(), "enemy")?;
        }

        self.world = world;
        self.grid = grid;
        self.player = player;
        self.enemies = enemies;
        log::info!(
            "Room {}x{} loaded with {} obstacles",
            self.grid.width(),
            self.grid.height(),
            self.world.obstacles().len()
        );
        Ok(())
    }

    fn check_spawns(&self) -> Result<(), ConfigError> {
        check_spawn(&self.world, self.player.bounding_box(), "player")?;
        for enemy in &self.enemies {
            check_spawn(&self.world, enemy.bounding_box(), "enemy")?;
        }
        Ok(())
    }

    /// Capture positions and states for rendering
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            player_position: self.player.position,
            player_bounds: self.player.bounding_box(),
            facing: self.player.facing,
            flashlight: self.player.flashlight_cone(),
            enemies: self
                .enemies
                .iter()
                .map(|enemy| {
                    let bounds = enemy.bounding_box();
                    EnemyView {
                        position: enemy.position,
                        bounds,
                        state: enemy.state(),
                        lit: self.player.illuminates(bounds.center()),
                    }
                })
                .collect(),
        }
    }

    /// Key-value save data for the player
    pub fn save_data(&self) -> SaveData {
        let mut data = SaveData::new();
        data.insert(
            "player".to_string(),
            json!({ "x": self.player.position.x, "y": self.player.position.y }),
        );
        let inventory = self
            .inventory
            .iter()
            .map(|(name, count)| (name.to_string(), json!(count)))
            .collect();
        data.insert("inventory".to_string(), Value::Object(inventory));
        data.insert("frame".to_string(), json!(self.frame));
        data
    }

    /// Restore whatever keys are present in `data`; unknown or malformed
    /// entries are skipped
    ///
    /// A saved player position inside one of this room's walls is ignored.
    pub fn apply_save_data(&mut self, data: &SaveData) {
        if let Some(player) = data.get("player") {
            let x = player.get("x").and_then(Value::as_f64);
            let y = player.get("y").and_then(Value::as_f64);
            if let (Some(x), Some(y)) = (x, y) {
                let position = Vec2::new(x as f32, y as f32);
                let bounds = BoundingBox::at(position, self.player.size);
                if self.world.intersects_any(&bounds) {
                    log::warn!("Ignoring saved player position {} inside a wall", position);
                } else {
                    self.player.position = position;
                }
            }
        }
        if let Some(inventory) = data.get("inventory") {
            match serde_json::from_value(inventory.clone()) {
                Ok(inventory) => self.inventory = inventory,
                Err(e) => log::warn!("Ignoring malformed inventory in save: {}", e),
            }
        }
        if let Some(frame) = data.get("frame").and_then(Value::as_u64) {
            self.frame = frame;
        }
    }
}
