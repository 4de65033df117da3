use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position in CSS pixels relative to `container`'s top-left corner.
#[inline]
pub fn pointer_local(ev: &web::PointerEvent, container: &web::Element) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}
