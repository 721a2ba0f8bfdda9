use crate::dom::{self, EventListener};
use parallax_core::PointerTarget;
use std::sync::Arc;
use web_sys as web;

/// Feed document mouse moves into the engine's pointer target.
///
/// The handler only stores the normalized target; the frame loop picks it up
/// on its next tick.
pub fn wire_pointer_target(
    document: &web::Document,
    window: &web::Window,
    target: Arc<PointerTarget>,
) -> anyhow::Result<EventListener> {
    let window = window.clone();
    EventListener::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let (vw, vh) = dom::viewport_size(&window);
        target.track(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    })
}
