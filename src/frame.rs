use crate::constants::HIGHLIGHT_STRENGTH;
use crate::debug_panel::SharedTuning;
use crate::input;
use crate::render;
use crate::sidebar::SharedStore;
use cab_core::{compose, SceneTuning};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub store: SharedStore,
    pub tuning: SharedTuning,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    /// Store revision and tuning the uploaded instances were built from.
    pub uploaded: Option<(u64, SceneTuning)>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        store: SharedStore,
        tuning: SharedTuning,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            store,
            tuning,
            canvas,
            gpu,
            last_instant: Instant::now(),
            uploaded: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Some(g) = &mut self.gpu else {
            return;
        };
        let store = self.store.borrow();
        let tuning = self.tuning.borrow();
        let (w, h) = (self.canvas.width(), self.canvas.height());
        g.resize_if_needed(w, h);
        let camera = tuning.camera(store.view_mode(), input::aspect_ratio(w, h));

        let stale = match &self.uploaded {
            Some((rev, t)) => *rev != store.revision() || *t != *tuning,
            None => true,
        };
        if stale {
            let scene = compose(&store, &tuning);
            g.upload_scene(&scene, camera.eye, HIGHLIGHT_STRENGTH);
            log::debug!(
                "[frame] recomposed {} elements at revision {}",
                scene.elements.len(),
                store.revision()
            );
            self.uploaded = Some((store.revision(), tuning.clone()));
        }

        if let Err(e) = g.render(dt_sec, &camera, &tuning) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
