use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on the element with `element_id`.
/// Returns false when the element is missing.
pub fn add_listener<E>(
    document: &web::Document,
    element_id: &str,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> bool
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{element_id}, no {event} listener");
        return false;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn add_window_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_inner_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Nearest ancestor-or-self of the event target carrying one of the
/// `data-*` attributes in `attrs`, with the attribute name and value.
pub fn data_control(ev: &web::Event, attrs: &[&str]) -> Option<(String, String)> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let selector = attrs
        .iter()
        .map(|a| format!("[data-{a}]"))
        .collect::<Vec<_>>()
        .join(",");
    let el = target.closest(&selector).ok()??;
    attrs.iter().find_map(|a| {
        el.get_attribute(&format!("data-{a}"))
            .map(|v| (a.to_string(), v))
    })
}

pub fn current_hash() -> String {
    web::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Some(w) = web::window() {
        if w.location().hash().ok().as_deref() != Some(hash) {
            _ = w.location().set_hash(hash);
        }
    }
}
