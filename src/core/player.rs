//! Player controls and movement.
use crate::core::sprite::Sprite;

/// Pixels per tick while an arrow key is held.
pub const PLAYER_SPEED: f32 = 2.0;

/// Arrow-key state for a single tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Controls {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Moves `sprite` by `speed` along each held direction. Keys are independent,
/// so opposite keys cancel and diagonals combine.
pub fn apply_controls(sprite: &mut Sprite, controls: Controls, speed: f32) {
    if controls.right { sprite.x += speed; }
    if controls.left  { sprite.x -= speed; }
    if controls.up    { sprite.y -= speed; }
    if controls.down  { sprite.y += speed; }
}
