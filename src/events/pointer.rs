use crate::constants::CLICK_SLOP_PX;
use crate::debug_panel::SharedTuning;
use crate::input;
use crate::sidebar::{self, SharedStore};
use cab_core::{compose, Action};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub store: SharedStore,
    pub tuning: SharedTuning,
    pub press: Rc<RefCell<input::PressState>>,
}

pub fn wire_pointer_picking(w: PickWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.press.borrow_mut().down = Some(input::pointer_css_px(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(down) = w.press.borrow_mut().down.take() else {
            return;
        };
        if !input::is_click(down, input::pointer_css_px(&ev), CLICK_SLOP_PX) {
            return;
        }
        let Some(ndc) = input::pointer_ndc(&ev, &w.canvas) else {
            return;
        };

        let hit = {
            let store = w.store.borrow();
            let tuning = w.tuning.borrow();
            let aspect = input::aspect_ratio(w.canvas.width(), w.canvas.height());
            let camera = tuning.camera(store.view_mode(), aspect);
            let (ro, rd) = camera.ray_from_ndc(ndc.x, ndc.y);
            compose(&store, &tuning).pick(ro, rd)
        };

        match hit {
            Some(zone) => {
                log::info!("[click] picked {zone}");
                sidebar::dispatch(&w.store, Action::SelectZone(zone));
            }
            None => log::debug!("[click] nothing at ({:.2},{:.2})", ndc.x, ndc.y),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
