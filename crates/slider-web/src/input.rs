use glam::DVec2;
use slider_core::surface_offset;
use web_sys as web;

/// Pointer position in surface user units relative to the surface center.
#[inline]
pub fn pointer_offset(ev: &web::PointerEvent, svg: &web::Element, surface_size: f64) -> DVec2 {
    let rect = svg.get_bounding_client_rect();
    surface_offset(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        surface_size,
    )
}
