//! Core game types and logic (data, input, pursuit, tilemap).
//!
//! Re-exports:
//! - `sprite`: Sprite, Enemy and Cauldron data
//! - `player`: Arrow-key controls and player movement
//! - `enemy`: One-unit pursuit step
//! - `tilemap`: Tilemap JSON decoding and tile placement maths
//! - `game`: Game state and the per-tick update

pub mod sprite;
pub mod player;
pub mod enemy;
pub mod tilemap;
pub mod game;
