//! Sprite drawing helpers.
//!
//! Exposes:
//! - `sprite_frame`: source cell of a sprite's first frame
//! - `draw_sprite`: draw a single sprite at its position
//! - `draw_entities`: player, enemies, cauldron in that order
use raylib::prelude::*;

use crate::core::game::Game;
use crate::core::sprite::Sprite;
use crate::render::textures::TextureManager;

/// Character sheets hold 16×16 frames; only the first one is drawn.
pub const FRAME_SIZE: i32 = 16;

/// First frame of a sheet, clamped to the texture when it is smaller.
pub fn sprite_frame(tex_w: i32, tex_h: i32) -> (i32, i32) {
    (tex_w.min(FRAME_SIZE).max(0), tex_h.min(FRAME_SIZE).max(0))
}

pub fn draw_sprite<D: RaylibDraw>(d: &mut D, sprite: &Sprite, texman: &TextureManager) {
    let Some(tex) = texman.get(sprite.texture) else { return; };
    let (fw, fh) = sprite_frame(tex.width(), tex.height());
    let src = Rectangle::new(0.0, 0.0, fw as f32, fh as f32);
    d.draw_texture_rec(tex, src, Vector2::new(sprite.x, sprite.y), Color::WHITE);
}

pub fn draw_entities<D: RaylibDraw>(d: &mut D, game: &Game, texman: &TextureManager) {
    draw_sprite(d, &game.player, texman);
    for enemy in &game.enemies {
        draw_sprite(d, &enemy.sprite, texman);
    }
    draw_sprite(d, &game.cauldron.sprite, texman);
}
