use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::core::player::PLAYER_SPEED;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DEMO_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

// ── Variant ───────────────────────────────────────────────────────────────────

/// Logical frame size. The frame is rendered at this resolution and then
/// scaled into the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// 320 × 240
    Classic,
    /// 256 × 176, the original handheld overworld size.
    Overworld,
}

impl Variant {
    pub fn screen_size(self) -> (u32, u32) {
        match self {
            Variant::Classic => (320, 240),
            Variant::Overworld => (256, 176),
        }
    }
}

// ── Assets / spawns ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub enemy: PathBuf,
    pub cauldron: PathBuf,
    pub tileset: PathBuf,
    pub tilemap: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "assets/images/character.png".into(),
            enemy: "assets/images/skeleton.png".into(),
            cauldron: "assets/images/cauldron.png".into(),
            tileset: "assets/images/tileset_floor.png".into(),
            tilemap: "assets/maps/spawn.json".into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Spawn {
    pub x: f32,
    pub y: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub follows_player: bool,
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Startup configuration. Every field has a default, so a config file only
/// needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub variant: Variant,
    pub tile_size: u32,
    pub target_fps: u32,
    pub player_speed: f32,
    pub assets: AssetPaths,
    pub player: Spawn,
    pub cauldron: Spawn,
    pub enemies: Vec<EnemySpawn>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Legend of Zelda".to_string(),
            window_width: 640,
            window_height: 480,
            variant: Variant::Classic,
            tile_size: 16,
            target_fps: 60,
            player_speed: PLAYER_SPEED,
            assets: AssetPaths::default(),
            player: Spawn { x: 100.0, y: 100.0 },
            cauldron: Spawn { x: 100.0, y: 50.0 },
            enemies: vec![
                EnemySpawn { x: 50.0, y: 50.0, follows_player: true },
                EnemySpawn { x: 150.0, y: 150.0, follows_player: false },
                EnemySpawn { x: 75.0, y: 75.0, follows_player: false },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed config JSON")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
    }

    /// `$DEMO_CONFIG` if set, else `config.json` if it exists, else defaults.
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), Path::new(DEFAULT_CONFIG_PATH))
    }

    /// An explicit path must load; the fallback path is optional.
    pub fn resolve_from(explicit: Option<PathBuf>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config from {}", CONFIG_ENV_VAR);
            return Self::load(path);
        }
        if fallback.exists() {
            info!(path = %fallback.display(), "loading config");
            return Self::load(fallback);
        }
        info!("no config file, using defaults");
        Ok(Self::default())
    }

    pub fn screen_size(&self) -> (u32, u32) {
        self.variant.screen_size()
    }
}
