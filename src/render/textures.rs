use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use raylib::prelude::*;
use tracing::info;

use crate::config::AssetPaths;
use crate::core::sprite::TextureKey;

/// GPU textures keyed by `TextureKey`, loaded once at startup.
pub struct TextureManager {
    textures: HashMap<TextureKey, Texture2D>,
}

impl TextureManager {
    /// Loads every image the demo draws. A missing or unreadable file is an
    /// error; there is no fallback art.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, assets: &AssetPaths) -> Result<Self> {
        let wanted = [
            (TextureKey::Player, &assets.player),
            (TextureKey::Enemy, &assets.enemy),
            (TextureKey::Cauldron, &assets.cauldron),
            (TextureKey::Tileset, &assets.tileset),
        ];

        let mut textures = HashMap::new();
        for (key, path) in wanted {
            let name = path.to_string_lossy();
            let tex = rl
                .load_texture(thread, &name)
                .map_err(|e| anyhow!("{}", e))
                .with_context(|| format!("could not load image {}", name))?;
            info!(?key, path = %name, w = tex.width(), h = tex.height(), "texture loaded");
            textures.insert(key, tex);
        }

        Ok(Self { textures })
    }

    pub fn get(&self, key: TextureKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    /// Texture size in pixels.
    pub fn size(&self, key: TextureKey) -> Option<(i32, i32)> {
        self.textures.get(&key).map(|t| (t.width(), t.height()))
    }

    /// Whole tiles per row of the tileset.
    pub fn tileset_columns(&self, tile_size: u32) -> u32 {
        match self.size(TextureKey::Tileset) {
            Some((w, _)) if tile_size > 0 => w.max(0) as u32 / tile_size,
            _ => 0,
        }
    }
}
