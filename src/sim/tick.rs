//! Fixed timestep simulation tick
//!
//! One call advances every actor exactly once: the player first, then each
//! enemy against this frame's player position.

use glam::Vec2;

use super::enemy::EnemyState;
use super::state::GameState;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Player movement intent (unit length or zero)
    pub intent: Vec2,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    state.frame += 1;

    let world = &state.world;
    state.player.update(input.intent, dt, world);

    // Enemies chase the center of the player's box, not its corner
    let player_pos = state.player.bounding_box().center();

    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        let before = enemy.state();
        enemy.update(dt, player_pos, world);
        match (before, enemy.state()) {
            (EnemyState::Patrol, EnemyState::Chase) => {
                log::debug!("Enemy {} spotted the player (frame {})", index, state.frame);
            }
            (EnemyState::Chase, EnemyState::Patrol) => {
                log::debug!("Enemy {} lost the player (frame {})", index, state.frame);
            }
            _ => {}
        }
    }
}
