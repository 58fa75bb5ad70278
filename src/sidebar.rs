use crate::constants::SIDEBAR_ID;
use crate::{dom, markup};
use cab_core::{Action, ConfiguratorStore};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedStore = Rc<RefCell<ConfiguratorStore>>;

pub fn render(document: &web::Document, store: &ConfiguratorStore) {
    dom::set_inner_html(document, SIDEBAR_ID, &markup::sidebar_html(store));
}

/// Single write path for UI code: dispatch, then refresh the sidebar and
/// keep the location hash in step with the view.
pub fn dispatch(store: &SharedStore, action: Action) -> bool {
    let (changed, view) = {
        let mut s = store.borrow_mut();
        let changed = s.dispatch(action);
        (changed, s.view_mode())
    };
    if changed {
        if let Some(document) = dom::window_document() {
            render(&document, &store.borrow());
        }
        if matches!(action, Action::SetViewMode(_) | Action::ToggleViewMode) {
            dom::set_hash(view.route());
        }
    }
    changed
}

pub fn wire(document: &web::Document, store: SharedStore) {
    render(document, &store.borrow());
    dom::add_listener(document, SIDEBAR_ID, "click", move |ev: web::Event| {
        let Some((attr, value)) = dom::data_control(&ev, &markup::SIDEBAR_CONTROLS) else {
            return;
        };
        match Action::from_control(&attr, &value) {
            Ok(action) => {
                log::info!("[click] {attr}={value}");
                dispatch(&store, action);
            }
            Err(e) => log::warn!("[click] ignored: {e}"),
        }
    });
}
