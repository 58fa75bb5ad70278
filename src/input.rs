use glam::Vec2;
use web_sys as web;

/// Press position in CSS pixels, used to tell clicks from drags.
#[derive(Default, Clone, Copy)]
pub struct PressState {
    pub down: Option<Vec2>,
}

#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client coordinates to normalized device coordinates of a rect
/// (x right, y up, both in [-1, 1]). `None` for an empty rect.
#[inline]
pub fn client_to_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let u = (client.x - left) / width;
    let v = (client.y - top) / height;
    Some(Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        pointer_css_px(ev),
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// True when the pointer stayed within `slop` pixels of where it went down.
#[inline]
pub fn is_click(down: Vec2, up: Vec2, slop: f32) -> bool {
    down.distance_squared(up) <= slop * slop
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
