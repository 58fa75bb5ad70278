use crate::constants::DEBUG_PANEL_ID;
use crate::{dom, markup, overlay};
use cab_core::{SceneTuning, TuningParam};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedTuning = Rc<RefCell<SceneTuning>>;

pub fn render(document: &web::Document, tuning: &SceneTuning) {
    dom::set_inner_html(document, DEBUG_PANEL_ID, &markup::debug_panel_html(tuning));
}

fn on_slider(ev: &web::Event, tuning: &SharedTuning) {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(key) = input.get_attribute("data-param") else {
        return;
    };
    let param = match key.parse::<TuningParam>() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[tune] {e}");
            return;
        }
    };
    let Ok(value) = input.value().parse::<f32>() else {
        return;
    };
    let stored = tuning.borrow_mut().set(param, value);
    let output_id = format!("tune-{key}");
    if let Some(out) = dom::window_document().and_then(|d| d.get_element_by_id(&output_id)) {
        out.set_text_content(Some(&markup::format_value(param, stored)));
    }
    log::debug!("[tune] {key} = {stored}");
}

/// Render the tuning sliders (hidden until toggled) and bind them to `tuning`.
pub fn wire(document: &web::Document, tuning: SharedTuning) {
    render(document, &tuning.borrow());
    overlay::hide(document, DEBUG_PANEL_ID);

    let tuning_input = tuning.clone();
    dom::add_listener(document, DEBUG_PANEL_ID, "input", move |ev: web::Event| {
        on_slider(&ev, &tuning_input);
    });

    dom::add_listener(document, DEBUG_PANEL_ID, "click", move |ev: web::Event| {
        if let Some((_, action)) = dom::data_control(&ev, &["action"]) {
            if action == "reset-tuning" {
                *tuning.borrow_mut() = SceneTuning::default();
                if let Some(document) = dom::window_document() {
                    render(&document, &tuning.borrow());
                }
                log::info!("[tune] defaults restored");
            }
        }
    });
}
