use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::assets::{Assets, load_image};
use crate::canvas::WebCanvas;
use crate::config::Config;
use crate::error::{LevelError, Result};
use crate::js_value_to_string;
use crate::level_data::LevelSequenceDef;
use crate::logging;
use crate::world::{World, WorldContext};

const CANVAS_ID: &str = "game-canvas";

struct AppState {
    world: World,
    canvas: WebCanvas,
    document: Document,
    last_draw_error: Option<String>,
}

fn dom_err(what: &str) -> impl Fn(JsValue) -> LevelError + '_ {
    move |err| LevelError::Dom(format!("{}: {}", what, js_value_to_string(&err)))
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| LevelError::Dom("missing window".to_string()))
}

fn set_status(document: &Document, status: &str, message: &str) {
    if let Some(el) = document.document_element() {
        let _ = el.set_attribute("data-render-status", status);
        let _ = el.set_attribute("data-render-message", message);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    spawn_local(async {
        if let Err(err) = start_impl().await {
            log::error!("fatal: {}", err);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_status(&document, "error", &err.to_string());
            }
        }
    });
}

async fn start_impl() -> Result<()> {
    let win = window()?;
    let document = win
        .document()
        .ok_or_else(|| LevelError::Dom("missing document".to_string()))?;

    let search = win.location().search().unwrap_or_default();
    let config = Config::from_query(&search);
    log::info!("starting with {:?}", config);

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| LevelError::Dom(format!("missing #{}", CANVAS_ID)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| LevelError::Dom(format!("#{} is not a canvas", CANVAS_ID)))?;
    let size = config.window_size();
    canvas.set_width(size.x as u32);
    canvas.set_height(size.y as u32);

    let ctx = canvas
        .get_context("2d")
        .map_err(dom_err("getContext"))?
        .ok_or_else(|| LevelError::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| LevelError::Dom("unexpected 2d context type".to_string()))?;

    set_status(&document, "loading", "Loading level assets");
    let mut assets = Assets::new();
    assets.insert(load_image(&config.background_image).await?);

    let mut world_ctx = WorldContext::new(&config);
    world_ctx.window.hidpi_factor = win.device_pixel_ratio();
    let sequence = LevelSequenceDef::embedded()?;
    let world = World::from_sequence(&config, world_ctx, &sequence, &assets)?;

    set_status(&document, "running", "In game");
    let state = Rc::new(RefCell::new(AppState {
        world,
        canvas: WebCanvas::new(ctx, size),
        document,
        last_draw_error: None,
    }));
    run_frame_loop(state)
}

fn run_frame_loop(state: Rc<RefCell<AppState>>) -> Result<()> {
    let raf_holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let raf_holder_cb = Rc::clone(&raf_holder);

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let running = {
            let mut st = state.borrow_mut();
            let st = &mut *st;
            let running = st.world.tick(&mut st.canvas);

            if let Some(err) = st.canvas.last_error() {
                if st.last_draw_error.as_deref() != Some(err) {
                    log::warn!("{}", err);
                    st.last_draw_error = Some(err.to_string());
                }
            }

            if !running {
                let score = st.world.player().score;
                set_status(
                    &st.document,
                    "complete",
                    &format!("All levels complete, score {}", score),
                );
            }
            running
        };

        if !running {
            return;
        }

        if let (Ok(win), Some(cb)) = (window(), raf_holder_cb.borrow().as_ref()) {
            if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame: {}", js_value_to_string(&err));
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(dom_err("requestAnimationFrame"))?;
    *raf_holder.borrow_mut() = Some(cb);
    Ok(())
}
