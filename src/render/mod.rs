//! Rendering and input glue for the raylib host.
//!
//! Re-exports:
//! - `textures`: Image loading keyed by `TextureKey`
//! - `screen`: Fixed-size offscreen frame and letterboxed present
//! - `tilemap`: Tile layer drawing
//! - `sprites`: Sprite drawing
//! - `input`: Arrow-key polling

pub mod textures;
pub mod screen;
pub mod tilemap;
pub mod sprites;
pub mod input;
