#![cfg(target_arch = "wasm32")]
use cab_core::{ConfiguratorStore, SceneTuning, ViewMode};
use constants::{CANVAS_ID, HELP_OVERLAY_ID};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug_panel;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod markup;
mod overlay;
mod render;
mod sidebar;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

fn wire_help_overlay(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "help-close", "click", move |_ev: web::Event| {
        overlay::hide(&doc, HELP_OVERLAY_ID);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cab-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let view = ViewMode::from_route(&dom::current_hash());
    log::info!("[route] starting in {view} view");
    let store = Rc::new(RefCell::new(ConfiguratorStore::new(view)));
    let tuning = Rc::new(RefCell::new(SceneTuning::default()));

    // The sidebar and keys work even when the canvas or GPU is unavailable.
    sidebar::wire(&document, store.clone());
    debug_panel::wire(&document, tuning.clone());
    wire_help_overlay(&document);
    events::wire_global_keydown(store.clone());
    events::wire_hashchange(store.clone());

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    events::wire_pointer_picking(events::PickWiring {
        canvas: canvas.clone(),
        store: store.clone(),
        tuning: tuning.clone(),
        press: Rc::new(RefCell::new(input::PressState::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        store, tuning, canvas, gpu,
    )));
    frame::start_loop(frame_ctx);

    Ok(())
}
