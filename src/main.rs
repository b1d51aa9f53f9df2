// main.rs
use anyhow::Result;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use legend_tilemap_demo::config::GameConfig;
use legend_tilemap_demo::core::game::Game;
use legend_tilemap_demo::core::player::Controls;
use legend_tilemap_demo::core::tilemap::Tilemap;
use legend_tilemap_demo::render::screen::Screen;
use legend_tilemap_demo::render::sprites::draw_entities;
use legend_tilemap_demo::render::textures::TextureManager;
use legend_tilemap_demo::render::tilemap::draw_tilemap;

fn main() {
    init_tracing();
    info!("=== startup ===");

    if let Err(err) = run() {
        error!(error = %format!("{:#}", err), "fatal");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> Result<()> {
    let config = GameConfig::resolve()?;
    let (screen_w, screen_h) = config.screen_size();

    let tilemap = Tilemap::load(&config.assets.tilemap)?;
    let (map_w, map_h) = tilemap.pixel_size(config.tile_size);
    info!(layers = tilemap.layers.len(), map_w, map_h, "tilemap loaded");

    let (mut window, raylib_thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title(&config.title)
        .resizable()
        .build();
    window.set_target_fps(config.target_fps);

    let texman = TextureManager::load(&mut window, &raylib_thread, &config.assets)?;
    let mut screen = Screen::new(&mut window, &raylib_thread, screen_w, screen_h)?;
    let mut game = Game::new(tilemap, &config);
    info!(screen_w, screen_h, enemies = game.enemies.len(), followers = game.followers(), "entering main loop");

    while !window.window_should_close() {
        // Una actualizacion y un dibujado por tick
        let controls = Controls::poll(&window);
        game.update(controls)?;

        let mut d = window.begin_drawing(&raylib_thread);
        screen.render(&mut d, &raylib_thread, |t| {
            draw_tilemap(t, &game.tilemap, &texman, config.tile_size);
            draw_entities(t, &game, &texman);
        });
        screen.present(&mut d);
    }

    info!(ticks = game.ticks, "window closed");
    Ok(())
}
