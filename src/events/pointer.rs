use crate::core::{ParticleField, PointerTracker};
use crate::dom::{self, EventListener};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed window pointer-move samples into the tracker.
pub fn wire_pointer_tracking(
    tracker: Rc<RefCell<PointerTracker>>,
) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    EventListener::new(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        tracker.borrow_mut().record(pos);
    })
}

/// Keep the canvas backing store and the field bounds at viewport size.
pub fn wire_viewport_resize(
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    EventListener::new(&window, "resize", move |_: web::Event| {
        if let Some(size) = dom::sync_canvas_to_viewport(&canvas) {
            field.borrow_mut().resize(size);
        }
    })
}
