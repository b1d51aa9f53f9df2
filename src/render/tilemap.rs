//! Tile layer drawing.
use raylib::prelude::*;

use crate::core::sprite::TextureKey;
use crate::core::tilemap::Tilemap;
use crate::render::textures::TextureManager;

/// Blits each placed tile's spritesheet cell at its screen offset.
pub fn draw_tilemap<D: RaylibDraw>(d: &mut D, tilemap: &Tilemap, texman: &TextureManager, tile_size: u32) {
    let Some(tileset) = texman.get(TextureKey::Tileset) else { return; };
    let columns = texman.tileset_columns(tile_size);
    let ts = tile_size as f32;
    for tile in tilemap.placements(columns, tile_size) {
        let src = Rectangle::new(tile.src.0 as f32, tile.src.1 as f32, ts, ts);
        let pos = Vector2::new(tile.dest.0 as f32, tile.dest.1 as f32);
        d.draw_texture_rec(tileset, src, pos, Color::WHITE);
    }
}
