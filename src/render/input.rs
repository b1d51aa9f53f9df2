use raylib::prelude::*;

use crate::core::player::Controls;

impl Controls {
    /// Samples the arrow keys once for this tick.
    pub fn poll(rl: &RaylibHandle) -> Self {
        Self {
            left: rl.is_key_down(KeyboardKey::KEY_LEFT),
            right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
            up: rl.is_key_down(KeyboardKey::KEY_UP),
            down: rl.is_key_down(KeyboardKey::KEY_DOWN),
        }
    }
}
