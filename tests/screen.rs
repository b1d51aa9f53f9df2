use legend_tilemap_demo::render::screen::{letterbox, Viewport};
use legend_tilemap_demo::render::sprites::{sprite_frame, FRAME_SIZE};

#[test]
fn exact_multiple_fills_window() {
    assert_eq!(letterbox(640, 480, 320, 240), Viewport { x: 0.0, y: 0.0, w: 640.0, h: 480.0 });
}

#[test]
fn wide_window_gets_side_bars() {
    let vp = letterbox(1000, 480, 320, 240);
    assert_eq!((vp.w, vp.h), (640.0, 480.0));
    assert_eq!((vp.x, vp.y), (180.0, 0.0));
}

#[test]
fn tall_window_gets_top_bars() {
    let vp = letterbox(512, 800, 256, 176);
    assert_eq!((vp.w, vp.h), (512.0, 352.0));
    assert_eq!((vp.x, vp.y), (0.0, 224.0));
}

#[test]
fn degenerate_sizes_collapse() {
    let zero = Viewport { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };
    assert_eq!(letterbox(0, 480, 320, 240), zero);
    assert_eq!(letterbox(640, 480, 0, 240), zero);
}

#[test]
fn sprite_frame_clamps_to_texture() {
    assert_eq!(sprite_frame(64, 128), (FRAME_SIZE, FRAME_SIZE));
    assert_eq!(sprite_frame(12, 64), (12, 16));
    assert_eq!(sprite_frame(8, 8), (8, 8));
}
