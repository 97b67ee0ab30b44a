#![cfg(target_arch = "wasm32")]
use crate::core::transition::SubscriptionId;
use crate::core::{TransitionTimings, WipeTimeline};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod field;
mod frame;
mod overlay;
mod routing;
mod transition;

use constants::{PARTICLE_CANVAS_ID, TRANSITION_OVERRIDE_KEYS};
use field::ParticleController;
use overlay::WipeOverlay;
use transition::{Navigator, TransitionDriver};

/// Everything `start` wires up. Dropping it tears the effects down:
/// listeners are removed, timers cleared, frame loops cancelled.
struct App {
    transition: Rc<TransitionDriver>,
    particles: Option<Rc<RefCell<ParticleController>>>,
    _clicks: dom::EventListener,
    _media: Vec<dom::EventListener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn transition_timings(document: &web::Document, animate: bool) -> TransitionTimings {
    let overrides = document
        .body()
        .map(|b| dom::data_overrides(&b, &TRANSITION_OVERRIDE_KEYS))
        .unwrap_or_default();
    let (timings, errors) = TransitionTimings::default()
        .with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[transition] ignoring override: {}", e);
    }
    if animate {
        timings
    } else {
        timings.reduced_motion()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if routing::apply_locale_redirect(&window) {
        return Ok(());
    }

    let profile = events::media::device_profile();
    let clock = dom::Clock::new();

    // Transition: driver, overlay subscribed to its phases, click interception
    let timings = transition_timings(&document, profile.should_animate());
    let driver = TransitionDriver::new(timings, clock);
    match WipeOverlay::mount(
        &document,
        WipeTimeline::new(timings),
        clock,
        (driver.phase(), driver.phase_since()),
        profile.should_animate(),
    ) {
        Ok(overlay) => {
            let overlay = Rc::new(overlay);
            driver.subscribe(move |phase, since| overlay.on_phase(phase, since));
        }
        Err(e) => log::warn!("[overlay] not mounted: {:?}", e),
    }
    let clicks = events::wire_link_clicks(&document, driver.clone())?;

    // Particles: optional, the page may not have a canvas
    let particles = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .map(|canvas| Rc::new(RefCell::new(ParticleController::new(canvas, profile))));
    if particles.is_none() {
        log::info!("[particles] no #{} on this page", PARTICLE_CANVAS_ID);
    }

    let media = match &particles {
        Some(p) => {
            let weak = Rc::downgrade(p);
            events::wire_media_changes(move |profile| {
                if let Some(p) = weak.upgrade() {
                    p.borrow_mut().set_profile(profile);
                }
            })
        }
        None => Vec::new(),
    };

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            transition: driver,
            particles,
            _clicks: clicks,
            _media: media,
        })
    });
    Ok(())
}

fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|app| app.borrow().as_ref().map(f))
}

/// Resume the particle field (subject to device gating).
#[wasm_bindgen]
pub fn mount_particles() {
    with_app(|app| {
        if let Some(p) = &app.particles {
            p.borrow_mut().set_enabled(true);
        }
    });
}

/// Tear the particle field down until `mount_particles` is called.
#[wasm_bindgen]
pub fn unmount_particles() {
    with_app(|app| {
        if let Some(p) = &app.particles {
            p.borrow_mut().set_enabled(false);
        }
    });
}

/// Register a client-side router push, called with the target href.
#[wasm_bindgen]
pub fn set_navigator(push: js_sys::Function) {
    with_app(|app| app.transition.set_navigator(Navigator::Router(push)));
}

/// Play a transition to `href` as if a link had been clicked.
#[wasm_bindgen]
pub fn navigate_with_transition(href: String) {
    // Released before the request so phase listeners may call back in.
    if let Some(driver) = with_app(|app| app.transition.clone()) {
        driver.request(href);
    }
}

/// Call `listener(phase, sinceMs)` on every phase change. Returns a handle
/// for `off_transition_phase`.
#[wasm_bindgen]
pub fn on_transition_phase(listener: js_sys::Function) -> Option<u32> {
    with_app(|app| {
        let id = app.transition.subscribe(move |phase, since| {
            let since = JsValue::from_f64(since.as_secs_f64() * 1000.0);
            let phase = JsValue::from_str(phase.as_str());
            if let Err(e) = listener.call2(&JsValue::NULL, &phase, &since) {
                log::warn!("[transition] phase listener threw: {:?}", e);
            }
        });
        id.0 as u32
    })
}

#[wasm_bindgen]
pub fn off_transition_phase(handle: u32) -> bool {
    with_app(|app| app.transition.unsubscribe(SubscriptionId(handle as u64))).unwrap_or(false)
}

#[wasm_bindgen]
pub fn transition_phase() -> String {
    with_app(|app| app.transition.phase().as_str().to_string()).unwrap_or_else(|| "idle".into())
}

/// Remove every listener, timer, frame loop and overlay element.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if let Some(app) = app {
        app.transition.shutdown();
        log::info!("studio-fx stopped");
    }
}
