//! Side-scrolling level runner rendered onto a 2D canvas.
//!
//! The level logic is target independent; `web` binds it to an
//! `HtmlCanvasElement` when built for `wasm32`.

pub mod assets;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geom;
pub mod items;
pub mod level;
pub mod level_data;
pub mod logging;
pub mod player;
#[cfg(target_arch = "wasm32")]
mod web;
pub mod world;

pub use assets::{Assets, Image};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, WebCanvas};
pub use config::Config;
pub use error::LevelError;
pub use geom::{Rect, Vec2};
pub use items::{Block, Exit, LevelItem};
pub use level::{Level, LevelTransition};
pub use level_data::{ItemDef, LevelDef, LevelSequenceDef};
pub use player::Player;
pub use world::{World, WorldContext};

use wasm_bindgen::JsValue;

pub(crate) fn js_value_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
