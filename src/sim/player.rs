//! The player character and its flashlight

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use super::collision::{CollisionWorld, move_and_collide};
use crate::consts::*;
use crate::settings::PlayerTuning;

/// The player-controlled actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left position (source of truth for the bounding box)
    pub position: Vec2,
    /// Movement speed (units/s)
    pub speed: f32,
    /// Collision box size
    pub size: IVec2,
    /// Last non-zero movement direction (unit length)
    pub facing: Vec2,
    /// Distance from the player center to the flashlight tip
    pub flashlight_length: f32,
    /// Width of the flashlight cone at its widest point
    pub flashlight_width: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            speed: PLAYER_SPEED,
            size: IVec2::splat(PLAYER_SIZE),
            facing: Vec2::X,
            flashlight_length: FLASHLIGHT_LENGTH,
            flashlight_width: FLASHLIGHT_WIDTH,
        }
    }

    /// Create a player using tuning values from settings
    pub fn with_tuning(position: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            speed: tuning.speed,
            size: tuning.size,
            flashlight_length: tuning.flashlight_length,
            flashlight_width: tuning.flashlight_width,
            ..Self::new(position)
        }
    }

    /// Current collision box
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::at(self.position, self.size)
    }

    /// Advance one frame
    ///
    /// `intent` is unit length or zero. A non-zero intent also turns the
    /// player (and the flashlight) to face it.
    pub fn update(&mut self, intent: Vec2, dt: f32, world: &CollisionWorld) -> BoundingBox {
        if intent.length_squared() > 0.0 {
            self.facing = intent;
        }
        let velocity = intent * self.speed * dt;
        move_and_collide(&mut self.position, self.size, velocity, world)
    }

    /// Flashlight cone as a kite: `[center, left, tip, right]`
    pub fn flashlight_cone(&self) -> [Vec2; 4] {
        let center = self.bounding_box().center();
        let forward = self.facing.try_normalize().unwrap_or(Vec2::X);
        let perpendicular = forward.perp();
        let shoulder = center + forward * (self.flashlight_length * FLASHLIGHT_SHOULDER);
        let half_width = perpendicular * (self.flashlight_width / 2.0);

        [
            center,
            shoulder + half_width,
            center + forward * self.flashlight_length,
            shoulder - half_width,
        ]
    }

    /// Check whether a world point falls inside the flashlight cone
    pub fn illuminates(&self, point: Vec2) -> bool {
        point_in_convex(&self.flashlight_cone(), point)
    }
}

/// Point-in-polygon for a convex polygon of either winding (edges inclusive)
fn point_in_convex(polygon: &[Vec2], point: Vec2) -> bool {
    let mut sign = 0.0f32;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b - a).perp_dot(point - a);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::TileGrid;

    #[test]
    fn test_update_moves_and_faces() {
        let world = CollisionWorld::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0));

        player.update(Vec2::new(0.0, 1.0), 0.1, &world);
        assert_eq!(player.position, Vec2::new(100.0, 115.0));
        assert_eq!(player.facing, Vec2::Y);
        assert_eq!(player.bounding_box(), BoundingBox::new(100, 115, 24, 24));
    }

    #[test]
    fn test_idle_keeps_facing_and_position() {
        let world = CollisionWorld::default();
        let mut player = Player::new(Vec2::new(10.5, 20.25));
        player.facing = Vec2::NEG_Y;

        let bounds = player.update(Vec2::ZERO, 0.1, &world);
        assert_eq!(player.position, Vec2::new(10.5, 20.25));
        assert_eq!(player.facing, Vec2::NEG_Y);
        assert_eq!(bounds, player.bounding_box());
    }

    #[test]
    fn test_blocked_by_wall() {
        let grid = TileGrid::new(32, vec![vec![0, 0, 1]]).unwrap();
        let world = CollisionWorld::from_grid(&grid);
        let mut player = Player::new(Vec2::new(30.0, 4.0));

        for _ in 0..20 {
            player.update(Vec2::X, 1.0 / 60.0, &world);
        }
        assert_eq!(player.bounding_box().right(), 64);
        assert!(!world.intersects_any(&player.bounding_box()));
    }

    #[test]
    fn test_flashlight_cone_geometry() {
        let player = Player::new(Vec2::ZERO);
        let [center, left, tip, right] = player.flashlight_cone();
        assert_eq!(center, Vec2::new(12.0, 12.0));
        assert!((tip - Vec2::new(152.0, 12.0)).length() < 1e-4);
        assert!((left - Vec2::new(96.0, 57.0)).length() < 1e-4);
        assert!((right - Vec2::new(96.0, -33.0)).length() < 1e-4);
    }

    #[test]
    fn test_illuminates_ahead_only() {
        let mut player = Player::new(Vec2::ZERO);
        assert!(player.illuminates(Vec2::new(100.0, 12.0)));
        assert!(!player.illuminates(Vec2::new(-50.0, 12.0)));
        assert!(!player.illuminates(Vec2::new(200.0, 12.0)));

        player.facing = Vec2::NEG_X;
        assert!(player.illuminates(Vec2::new(-50.0, 12.0)));
        assert!(!player.illuminates(Vec2::new(100.0, 12.0)));
    }
}
