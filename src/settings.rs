//! Gameplay settings and tuning
//!
//! Loaded from an optional JSON file next to the map data. Every field has
//! a default, so a partial file only overrides what it names.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Player movement and flashlight tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement speed (units/s)
    pub speed: f32,
    /// Collision box size
    pub size: IVec2,
    pub flashlight_length: f32,
    pub flashlight_width: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            size: IVec2::splat(PLAYER_SIZE),
            flashlight_length: FLASHLIGHT_LENGTH,
            flashlight_width: FLASHLIGHT_WIDTH,
        }
    }
}

/// Enemy movement and perception tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Speed while walking the patrol route (units/s)
    pub patrol_speed: f32,
    /// Speed while chasing the player (units/s)
    pub chase_speed: f32,
    /// Player distance at or under which the enemy gives chase
    pub detection_radius: f32,
    /// Collision box size
    pub size: IVec2,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            patrol_speed: ENEMY_PATROL_SPEED,
            chase_speed: ENEMY_CHASE_SPEED,
            detection_radius: ENEMY_DETECTION_RADIUS,
            size: IVec2::splat(ENEMY_SIZE),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults if it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
