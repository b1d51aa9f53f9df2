//! Tilemap loading and tile placement.
//!
//! The JSON layout follows a Tiled export, trimmed to the fields the demo
//! draws from:
//!
//! ```json
//! { "layers": [ { "name": "floor", "width": 20, "height": 15, "data": [1, 2, 0, ...] } ] }
//! ```
//!
//! Tile id `0` is an empty cell. Any other id `n` references spritesheet cell
//! `n - 1`, counted row-major across the sheet. The top three bits of an id
//! are Tiled's flip flags and are ignored.
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Tiled stores horizontal, vertical and diagonal flips in bits 31..29.
pub const TILE_ID_MASK: u32 = 0x1FFF_FFFF;

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub width: u32,
    pub data: Vec<u32>,
    pub visible: bool,
}

impl TileLayer {
    /// Number of rows; zero for a zero-width layer.
    pub fn height(&self) -> u32 {
        self.data
            .len()
            .checked_div(self.width as usize)
            .map_or(0, |rows| u32::try_from(rows).unwrap_or(u32::MAX))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tilemap {
    pub layers: Vec<TileLayer>,
}

/// Where one tile lands on screen and which spritesheet cell it samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TilePlacement {
    pub dest: (i32, i32),
    pub src: (i32, i32),
}

#[inline]
fn scaled(cells: usize, tile_size: u32) -> Option<i32> {
    let px = cells.checked_mul(tile_size as usize)?;
    i32::try_from(px).ok()
}

/// Screen offset of the tile at `index` in a layer `width` tiles wide.
/// `None` for zero-width layers and offsets past `i32`.
#[inline]
pub fn tile_screen_position(index: usize, width: u32, tile_size: u32) -> Option<(i32, i32)> {
    if width == 0 { return None; }
    let w = width as usize;
    Some((scaled(index % w, tile_size)?, scaled(index / w, tile_size)?))
}

/// Spritesheet offset of `tile_id` in a sheet `columns` cells wide. Empty
/// cells (id 0), zero-width sheets and offsets past `i32` have no source.
#[inline]
pub fn tile_source_position(tile_id: u32, columns: u32, tile_size: u32) -> Option<(i32, i32)> {
    let id = tile_id & TILE_ID_MASK;
    if id == 0 || columns == 0 { return None; }
    let cell = (id - 1) as usize;
    let cols = columns as usize;
    Some((scaled(cell % cols, tile_size)?, scaled(cell / cols, tile_size)?))
}

impl Tilemap {
    /// Parses and validates a tilemap document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTilemap = serde_json::from_str(json).context("malformed tilemap JSON")?;

        let mut layers = Vec::with_capacity(raw.layers.len());
        for (i, l) in raw.layers.into_iter().enumerate() {
            let name = l.name.unwrap_or_else(|| format!("layer{}", i));
            if l.kind.as_deref().is_some_and(|k| k != "tilelayer") {
                debug!(layer = %name, "skipping non-tile layer");
                continue;
            }
            if l.width == 0 {
                bail!("layer '{}' has zero width", name);
            }
            if l.data.len() % l.width as usize != 0 {
                bail!(
                    "layer '{}' has {} tiles, not a multiple of width {}",
                    name, l.data.len(), l.width
                );
            }
            let rows = l.data.len() / l.width as usize;
            if let Some(h) = l.height {
                if h as usize != rows {
                    bail!("layer '{}' declares height {} but holds {} rows", name, h, rows);
                }
            }
            debug!(layer = %name, width = l.width, rows, "tile layer decoded");
            layers.push(TileLayer { name, width: l.width, data: l.data, visible: l.visible });
        }

        Ok(Self { layers })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read tilemap {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("invalid tilemap {}", path.display()))
    }

    /// Every drawable tile, layer by layer in document order. Hidden layers,
    /// empty cells and ids with no on-sheet cell are skipped.
    pub fn placements(&self, columns: u32, tile_size: u32) -> impl Iterator<Item = TilePlacement> + '_ {
        self.layers
            .iter()
            .filter(|layer| layer.visible)
            .flat_map(move |layer| {
                layer.data.iter().enumerate().filter_map(move |(i, &id)| {
                    let src = tile_source_position(id, columns, tile_size)?;
                    let dest = tile_screen_position(i, layer.width, tile_size)?;
                    Some(TilePlacement { dest, src })
                })
            })
    }

    /// Extent of the widest and tallest layer, in pixels.
    pub fn pixel_size(&self, tile_size: u32) -> (u32, u32) {
        let w = self.layers.iter().map(|l| l.width).max().unwrap_or(0);
        let h = self.layers.iter().map(|l| l.height()).max().unwrap_or(0);
        (w.saturating_mul(tile_size), h.saturating_mul(tile_size))
    }
}

// JSON-facing types; extra Tiled fields are ignored. Object groups and other
// non-tile layers carry no `data` and are dropped during decoding.

#[derive(Deserialize)]
struct RawLayer {
    #[serde(rename = "type")]
    kind: Option<String>,
    name: Option<String>,
    #[serde(default)]
    width: u32,
    height: Option<u32>,
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default = "default_visible")]
    visible: bool,
}

fn default_visible() -> bool { true }

#[derive(Deserialize)]
struct RawTilemap {
    layers: Vec<RawLayer>,
}
