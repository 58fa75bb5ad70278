use crate::constants::{DEBUG_PANEL_ID, HELP_OVERLAY_ID};
use crate::keymap::{command_for_key, KeyCommand};
use crate::sidebar::{self, SharedStore};
use crate::{dom, overlay};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into the debug panel's inputs belong to the input.
fn from_form_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, store: &SharedStore) {
    if from_form_field(ev) || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(command) = command_for_key(&key) else {
        return;
    };
    match command {
        KeyCommand::Dispatch(action) => {
            if sidebar::dispatch(store, action) {
                log::info!("[keys] {key} -> {action:?}");
            }
        }
        KeyCommand::ToggleHelp => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle(&doc, HELP_OVERLAY_ID);
            }
        }
        KeyCommand::ToggleDebugPanel => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle(&doc, DEBUG_PANEL_ID);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(store: SharedStore) {
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &store);
    });
}
