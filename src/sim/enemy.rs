//! Enemy perception and patrol/chase state machine
//!
//! Each frame an enemy measures its distance to the player. Inside the
//! detection radius (inclusive) it heads straight for the player at chase
//! speed; otherwise it walks its patrol route. There is no memory of where
//! the player was last seen: the moment the player leaves the radius the
//! enemy goes back to patrolling.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use super::collision::{CollisionWorld, move_and_collide};
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::EnemyTuning;

/// Enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyState {
    /// Walking the patrol route
    #[default]
    Patrol,
    /// Heading for the player
    Chase,
}

/// A non-empty, cyclic list of waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyPatrolRoute);
        }
        Ok(Self { waypoints })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false for a constructed route
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at `index`, wrapping around the route
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec2 {
        self.waypoints[index % self.waypoints.len()]
    }

    /// Index after `index`, wrapping from the last waypoint to the first
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }
}

impl TryFrom<Vec<Vec2>> for PatrolRoute {
    type Error = ConfigError;

    fn try_from(waypoints: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl From<PatrolRoute> for Vec<Vec2> {
    fn from(route: PatrolRoute) -> Self {
        route.waypoints
    }
}

/// Movement decision for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub state: EnemyState,
    pub target: Vec2,
    pub speed: f32,
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left position (source of truth for the bounding box)
    pub position: Vec2,
    pub size: IVec2,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    /// Inclusive chase threshold
    pub detection_radius: f32,
    route: PatrolRoute,
    waypoint: usize,
    state: EnemyState,
    target: Vec2,
}

impl Enemy {
    pub fn new(position: Vec2, route: PatrolRoute) -> Self {
        let target = route.waypoint(0);
        Self {
            position,
            size: IVec2::splat(ENEMY_SIZE),
            patrol_speed: ENEMY_PATROL_SPEED,
            chase_speed: ENEMY_CHASE_SPEED,
            detection_radius: ENEMY_DETECTION_RADIUS,
            route,
            waypoint: 0,
            state: EnemyState::Patrol,
            target,
        }
    }

    /// Create an enemy using tuning values from settings
    pub fn with_tuning(position: Vec2, route: PatrolRoute, tuning: &EnemyTuning) -> Self {
        Self {
            size: tuning.size,
            patrol_speed: tuning.patrol_speed,
            chase_speed: tuning.chase_speed,
            detection_radius: tuning.detection_radius,
            ..Self::new(position, route)
        }
    }

    /// Current collision box
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::at(self.position, self.size)
    }

    /// State chosen on the most recent update
    pub fn state(&self) -> EnemyState {
        self.state
    }

    /// Target chosen on the most recent update
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Index of the waypoint the patrol is heading for
    pub fn waypoint_index(&self) -> usize {
        self.waypoint
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    /// Decide this frame's state, target, and speed
    ///
    /// While patrolling, reaching the current waypoint advances the route and
    /// the new waypoint becomes the target in the same frame.
    pub fn perceive(&mut self, player_pos: Vec2) -> Steering {
        let steering = if self.position.distance(player_pos) <= self.detection_radius {
            Steering {
                state: EnemyState::Chase,
                target: player_pos,
                speed: self.chase_speed,
            }
        } else {
            let mut target = self.route.waypoint(self.waypoint);
            if self.position.distance(target) < WAYPOINT_ARRIVAL_RADIUS {
                self.waypoint = self.route.next_index(self.waypoint);
                target = self.route.waypoint(self.waypoint);
                log::debug!("Enemy advancing to waypoint {}", self.waypoint);
            }
            Steering {
                state: EnemyState::Patrol,
                target,
                speed: self.patrol_speed,
            }
        };

        self.state = steering.state;
        self.target = steering.target;
        steering
    }

    /// Advance one frame: perceive, then move toward the chosen target
    pub fn update(&mut self, dt: f32, player_pos: Vec2, world: &CollisionWorld) -> BoundingBox {
        let steering = self.perceive(player_pos);
        let direction = (steering.target - self.position).normalize_or_zero();
        let velocity = direction * steering.speed * dt;
        move_and_collide(&mut self.position, self.size, velocity, world)
    }
}
