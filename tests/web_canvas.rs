#![cfg(target_arch = "wasm32")]

use scroll_runner::{Assets, Config, Image, LevelSequenceDef, Vec2, WebCanvas, World, WorldContext};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn context_2d(width: u32, height: u32) -> CanvasRenderingContext2d {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_width(width);
    canvas.set_height(height);

    canvas
        .get_context("2d")
        .expect("get context")
        .expect("2d context")
        .dyn_into::<CanvasRenderingContext2d>()
        .expect("cast 2d")
}

#[wasm_bindgen_test]
fn world_ticks_on_a_real_canvas() {
    let config = Config::default();
    let size = config.window_size();
    let mut canvas = WebCanvas::new(context_2d(size.x as u32, size.y as u32), size);

    // Headless images are skipped by the web canvas; HUD, items and player still draw.
    let mut assets = Assets::new();
    assets.insert(Image::headless(config.background_image.clone(), 64.0, 64.0));
    let sequence = LevelSequenceDef::embedded().expect("embedded levels");
    let mut world = World::from_sequence(&config, WorldContext::new(&config), &sequence, &assets)
        .expect("world");

    for _ in 0..config.block_size {
        assert!(world.tick(&mut canvas));
    }
    assert_eq!(world.player().score, 1);
    assert!(canvas.last_error().is_none());
}

#[wasm_bindgen_test]
fn player_pixels_land_on_the_canvas() {
    let ctx = context_2d(64, 64);
    let mut canvas = WebCanvas::new(ctx.clone(), Vec2::new(64.0, 64.0));
    let player = scroll_runner::Player::new(Vec2::new(16.0, 16.0), Vec2::new(32.0, 32.0));
    player.render(&mut canvas);

    let pixel = ctx.get_image_data(32.0, 32.0, 1.0, 1.0).expect("image data").data();
    assert_eq!(pixel[3], 255);
}
