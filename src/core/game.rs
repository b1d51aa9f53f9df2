//! Game state and the per-tick update.
use anyhow::Result;

use crate::config::GameConfig;
use crate::core::player::{apply_controls, Controls};
use crate::core::sprite::{Cauldron, Enemy, Sprite, TextureKey};
use crate::core::tilemap::Tilemap;

pub struct Game {
    pub player: Sprite,
    pub cauldron: Cauldron,
    pub enemies: Vec<Enemy>,
    pub tilemap: Tilemap,
    pub player_speed: f32,
    pub ticks: u64,
}

impl Game {
    pub fn new(tilemap: Tilemap, config: &GameConfig) -> Self {
        Self {
            player: Sprite::new(TextureKey::Player, config.player.x, config.player.y),
            cauldron: Cauldron::new(config.cauldron.x, config.cauldron.y),
            enemies: config
                .enemies
                .iter()
                .map(|e| Enemy::new(e.x, e.y, e.follows_player))
                .collect(),
            tilemap,
            player_speed: config.player_speed,
            ticks: 0,
        }
    }

    /// Enemies that chase the player.
    pub fn followers(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_following()).count()
    }

    /// One fixed tick. The player moves first, then every enemy steps toward
    /// the player's new position.
    pub fn update(&mut self, controls: Controls) -> Result<()> {
        if controls.any() {
            apply_controls(&mut self.player, controls, self.player_speed);
        }

        let (px, py) = self.player.position();
        for enemy in &mut self.enemies {
            enemy.step_towards(px, py);
        }

        self.ticks += 1;
        Ok(())
    }
}
