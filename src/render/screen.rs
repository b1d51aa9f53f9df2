use anyhow::{anyhow, Context, Result};
use raylib::prelude::*;

/// Destination rectangle of the logical frame inside the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Largest aspect-preserving fit of `logical` inside `window`, centred.
pub fn letterbox(window_w: i32, window_h: i32, logical_w: u32, logical_h: u32) -> Viewport {
    if window_w <= 0 || window_h <= 0 || logical_w == 0 || logical_h == 0 {
        return Viewport { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };
    }
    let (ww, wh) = (window_w as f32, window_h as f32);
    let (lw, lh) = (logical_w as f32, logical_h as f32);
    let scale = (ww / lw).min(wh / lh);
    let w = lw * scale;
    let h = lh * scale;
    Viewport { x: (ww - w) * 0.5, y: (wh - h) * 0.5, w, h }
}

/// Fixed-size offscreen frame; everything game-side draws here.
pub struct Screen {
    target: RenderTexture2D,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Screen {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, width: u32, height: u32) -> Result<Self> {
        let target = rl
            .load_render_texture(thread, width, height)
            .map_err(|e| anyhow!("{}", e))
            .context("could not create offscreen frame")?;
        Ok(Self {
            target,
            width,
            height,
            background_color: Color::new(120, 180, 255, 255),
        })
    }

    /// Clears the frame and runs `draw` against it.
    pub fn render<F>(&mut self, d: &mut RaylibDrawHandle, thread: &RaylibThread, draw: F)
    where
        F: FnOnce(&mut RaylibTextureMode<'_, RaylibDrawHandle<'_>>),
    {
        let bg = self.background_color;
        let mut t = d.begin_texture_mode(thread, &mut self.target);
        t.clear_background(bg);
        draw(&mut t);
    }

    /// Scales the frame into the window with letterbox bars.
    pub fn present(&self, d: &mut RaylibDrawHandle) {
        let vp = letterbox(d.get_screen_width(), d.get_screen_height(), self.width, self.height);
        d.clear_background(Color::BLACK);
        // Render textures are stored upside down.
        let src = Rectangle::new(0.0, 0.0, self.width as f32, -(self.height as f32));
        let dst = Rectangle::new(vp.x, vp.y, vp.w, vp.h);
        d.draw_texture_pro(self.target.texture(), src, dst, Vector2::zero(), 0.0, Color::WHITE);
    }
}
