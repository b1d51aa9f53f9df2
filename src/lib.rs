//! Top-down tilemap demo.
//!
//! Re-exports:
//! - `config`: window, screen variant, asset paths and spawn points
//! - `core`: host-independent game data and per-tick logic
//! - `render`: raylib glue (textures, fixed-size screen, drawing, input)

pub mod config;
pub mod core;
pub mod render;
