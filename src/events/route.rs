use crate::dom;
use crate::sidebar::{self, SharedStore};
use cab_core::{Action, ViewMode};
use web_sys as web;

/// Follow `#/straight` / `#/elevator` navigation while the page is open.
pub fn wire_hashchange(store: SharedStore) {
    dom::add_window_listener("hashchange", move |_ev: web::Event| {
        let hash = dom::current_hash();
        let view = ViewMode::from_route(&hash);
        if sidebar::dispatch(&store, Action::SetViewMode(view)) {
            log::info!("[route] {hash} -> {view}");
        }
    });
}
