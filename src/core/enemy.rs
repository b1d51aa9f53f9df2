//! Enemy pursuit.
use crate::core::sprite::Enemy;

/// Distance an enemy covers per tick on each axis.
pub const ENEMY_STEP: f32 = 1.0;

#[inline]
fn step_axis(from: f32, to: f32, step: f32) -> f32 {
    if from < to {
        from + step
    } else if from > to {
        from - step
    } else {
        from
    }
}

impl Enemy {
    pub fn is_following(&self) -> bool {
        self.follows_player
    }

    /// One pursuit tick: each axis moves `ENEMY_STEP` toward the target on its
    /// own. Ambient enemies stay where they are.
    pub fn step_towards(&mut self, target_x: f32, target_y: f32) {
        if !self.is_following() { return; }
        self.sprite.x = step_axis(self.sprite.x, target_x, ENEMY_STEP);
        self.sprite.y = step_axis(self.sprite.y, target_y, ENEMY_STEP);
    }
}
