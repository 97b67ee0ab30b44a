use crate::core::Ticker;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    ticker: RefCell<Ticker>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.ticker.borrow_mut().scheduled(id),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// `requestAnimationFrame` loop. The callback returns whether it wants
/// another frame; a paused loop is resumed with `start`. Dropping the loop
/// cancels any queued frame.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            ticker: RefCell::new(Ticker::new()),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move |time_ms: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            if !state.ticker.borrow_mut().fire() {
                return;
            }
            let keep_going = on_frame(time_ms);
            if state.ticker.borrow_mut().finish(keep_going) {
                state.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.tick.borrow_mut() = Some(closure);
        Self { state }
    }

    pub fn start(&self) {
        if self.state.ticker.borrow_mut().start() {
            self.state.request();
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.state.ticker.borrow_mut().stop() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
