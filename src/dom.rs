use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn viewport_size() -> Option<Vec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

/// Size the canvas backing store to the viewport in CSS pixels and return
/// the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let size = viewport_size()?;
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    Some(size)
}

pub fn media_matches(query: &str) -> bool {
    media_query(query).map(|m| m.matches()).unwrap_or(false)
}

pub fn media_query(query: &str) -> Option<web::MediaQueryList> {
    web::window()?.match_media(query).ok().flatten()
}

/// `data-<key>` attributes present on `el`, as `(key, value)` pairs.
pub fn data_overrides(el: &web::Element, keys: &[&'static str]) -> Vec<(&'static str, String)> {
    keys.iter()
        .filter_map(|k| {
            el.get_attribute(&format!("data-{}", k))
                .map(|v| (*k, v))
        })
        .collect()
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Monotonic clock shared by the transition driver and the overlay.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<E>(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// One-shot `setTimeout` cleared when dropped. The callback frees itself
/// after running; a cleared callback is leaked, which only happens on
/// retarget or teardown.
pub struct Timeout {
    id: i32,
}

impl Timeout {
    pub fn new(delay: Duration, callback: impl FnOnce() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let cb = Closure::once_into_js(callback);
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
            .map_err(js_err)?;
        Ok(Self { id })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
