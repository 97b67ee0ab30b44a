use crate::constants::ENTRY_MARKER_KEY;
use crate::core::transition::{Effects, SubscriptionId};
use crate::core::{Effect, Phase, PhaseBus, Sequencer, TransitionTimings};
use crate::dom::{self, Clock, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Where `Navigate` effects go.
#[derive(Clone)]
pub enum Navigator {
    /// Client-side router push registered from JavaScript.
    Router(js_sys::Function),
    /// Full document load; the next document picks up the entry reveal.
    Document,
}

impl Navigator {
    fn navigate(&self, href: &str) -> anyhow::Result<()> {
        match self {
            Navigator::Router(push) => {
                push.call1(&JsValue::NULL, &JsValue::from_str(href))
                    .map_err(dom::js_err)?;
            }
            Navigator::Document => {
                mark_entry();
                let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
                window.location().assign(href).map_err(dom::js_err)?;
            }
        }
        Ok(())
    }
}

fn session_storage() -> Option<web::Storage> {
    web::window()?.session_storage().ok().flatten()
}

fn mark_entry() {
    if let Some(s) = session_storage() {
        _ = s.set_item(ENTRY_MARKER_KEY, "1");
    }
}

/// Consume the marker left by the previous document, if any.
fn take_entry_marker() -> bool {
    let Some(s) = session_storage() else {
        return false;
    };
    let marked = matches!(s.get_item(ENTRY_MARKER_KEY), Ok(Some(_)));
    if marked {
        _ = s.remove_item(ENTRY_MARKER_KEY);
    }
    marked
}

/// Runs the sequencer against real timers and publishes its phases.
pub struct TransitionDriver {
    clock: Clock,
    sequencer: RefCell<Sequencer>,
    bus: PhaseBus,
    navigator: RefCell<Navigator>,
    timer: RefCell<Option<Timeout>>,
}

impl TransitionDriver {
    pub fn new(timings: TransitionTimings, clock: Clock) -> Rc<Self> {
        let sequencer = if take_entry_marker() {
            log::info!("[transition] revealing after document navigation");
            Sequencer::entering(timings, clock.now())
        } else {
            Sequencer::new(timings)
        };
        let driver = Rc::new(Self {
            clock,
            sequencer: RefCell::new(sequencer),
            bus: PhaseBus::new(),
            navigator: RefCell::new(Navigator::Document),
            timer: RefCell::new(None),
        });
        driver.rearm();
        driver
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.borrow().phase()
    }

    pub fn phase_since(&self) -> Duration {
        self.sequencer.borrow().phase_since()
    }

    pub fn set_navigator(&self, navigator: Navigator) {
        *self.navigator.borrow_mut() = navigator;
    }

    pub fn subscribe(&self, listener: impl FnMut(Phase, Duration) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Start (or retarget) a transition to `href`.
    pub fn request(self: &Rc<Self>, href: String) {
        let effects = self.sequencer.borrow_mut().request(href, self.clock.now());
        self.dispatch(effects);
        self.rearm();
    }

    /// Clear pending timers and lift the cover immediately.
    pub fn shutdown(&self) {
        self.timer.borrow_mut().take();
        let effects = self.sequencer.borrow_mut().cancel(self.clock.now());
        self.dispatch(effects);
    }

    fn on_timer(self: &Rc<Self>) {
        let effects = self.sequencer.borrow_mut().advance(self.clock.now());
        self.dispatch(effects);
        self.rearm();
    }

    // Runs with no sequencer borrow held: listeners and the router may
    // call back into the driver.
    fn dispatch(&self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::PhaseChanged(phase, since) => self.bus.publish(phase, since),
                Effect::Navigate(href) => {
                    log::info!("[transition] navigate {}", href);
                    let navigator = self.navigator.borrow().clone();
                    if let Err(e) = navigator.navigate(&href) {
                        log::warn!("[transition] navigation to {} failed: {:?}", href, e);
                    }
                }
            }
        }
    }

    fn rearm(self: &Rc<Self>) {
        let deadline = self.sequencer.borrow().next_deadline();
        let next = deadline.and_then(|at| {
            let delay = at.saturating_sub(self.clock.now());
            let weak = Rc::downgrade(self);
            Timeout::new(delay, move || {
                if let Some(driver) = weak.upgrade() {
                    driver.on_timer();
                }
            })
            .map_err(|e| log::warn!("[transition] cannot arm timer: {:?}", e))
            .ok()
        });
        *self.timer.borrow_mut() = next;
    }
}
