//! Keyboard state to movement intent

use glam::Vec2;

/// Direction keys held this frame (W/A/S/D or arrows)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Unit-length movement intent, or zero when idle or opposing keys cancel
    pub fn intent(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction.normalize_or_zero()
    }
}
