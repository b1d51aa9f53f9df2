use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use legend_tilemap_demo::config::*;

#[test]
fn defaults_match_the_classic_demo() {
    let c = GameConfig::default();
    assert_eq!(c.title, "Legend of Zelda");
    assert_eq!((c.window_width, c.window_height), (640, 480));
    assert_eq!(c.screen_size(), (320, 240));
    assert_eq!(c.tile_size, 16);
    assert_eq!(c.target_fps, 60);
    assert_eq!(c.player_speed, 2.0);
    assert_eq!(c.player, Spawn { x: 100.0, y: 100.0 });
    assert!(c.enemies.iter().any(|e| e.follows_player));
    assert!(c.enemies.iter().any(|e| !e.follows_player));
}

#[test]
fn variants_have_fixed_sizes() {
    assert_eq!(Variant::Classic.screen_size(), (320, 240));
    assert_eq!(Variant::Overworld.screen_size(), (256, 176));
}

#[test]
fn partial_json_keeps_other_defaults() {
    let c = GameConfig::from_json(r#"{
        "variant": "overworld",
        "player": { "x": 12, "y": 34 },
        "assets": { "tilemap": "maps/other.json" },
        "enemies": [ { "x": 1, "y": 2 } ]
    }"#).unwrap();

    assert_eq!(c.screen_size(), (256, 176));
    assert_eq!(c.player, Spawn { x: 12.0, y: 34.0 });
    assert_eq!(c.assets.tilemap, PathBuf::from("maps/other.json"));
    assert_eq!(c.assets.player, AssetPaths::default().player);
    assert_eq!(c.enemies, vec![EnemySpawn { x: 1.0, y: 2.0, follows_player: false }]);
    assert_eq!(c.title, "Legend of Zelda");
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(GameConfig::from_json(r#"{ "variant": "widescreen" }"#).is_err());
}

#[test]
fn bundled_example_config_parses() {
    let c = GameConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json")).unwrap();
    assert_eq!(c.variant, Variant::Overworld);
    assert_eq!(c.enemies.len(), 2);
}

#[test]
fn resolve_without_files_falls_back_to_defaults() {
    let c = GameConfig::resolve_from(None, Path::new("no/such/config.json")).unwrap();
    assert_eq!(c, GameConfig::default());
}

#[test]
fn resolve_with_missing_explicit_path_fails() {
    let err = GameConfig::resolve_from(Some(PathBuf::from("no/such/config.json")), Path::new("x")).unwrap_err();
    assert!(format!("{:#}", err).contains("could not read config"));
}

#[test]
fn wrong_field_type_is_rejected() {
    assert!(GameConfig::from_json(r#"{ "player": { "x": "a", "y": 1 } }"#).is_err());
}

#[test]
fn malformed_fallback_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "window_width": "wide" "#).unwrap();

    let err = GameConfig::resolve_from(None, &path).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid config"));
}

#[test]
fn present_fallback_file_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "variant": "overworld" }"#).unwrap();

    let c = GameConfig::resolve_from(None, &path).unwrap();
    assert_eq!(c.variant, Variant::Overworld);
}
