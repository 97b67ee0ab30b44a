use crate::constants::{PAGE_CONTENT_ID, WIPE_LAYER_CLASS, WIPE_Z_INDEX};
use crate::core::wipe::{content_opacity, initial_fade, LAYER_COLORS};
use crate::core::{Phase, WipeTimeline};
use crate::dom::{self, Clock};
use crate::frame::FrameLoop;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

struct OverlayState {
    layers: Vec<web::HtmlElement>,
    // Set when the page content should fade in; the content element is
    // looked up on use because client-side routing may replace it.
    document: Option<web::Document>,
    timeline: WipeTimeline,
    clock: Clock,
    phase: Cell<(Phase, Duration)>,
    // Content fade start; None once fully visible.
    fade_from: Cell<Option<Duration>>,
}

impl OverlayState {
    fn content(&self) -> Option<web::HtmlElement> {
        self.document
            .as_ref()?
            .get_element_by_id(PAGE_CONTENT_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()
    }

    /// Paint the current frame. Returns true while something still moves.
    fn paint(&self) -> bool {
        let now = self.clock.now();
        let (phase, since) = self.phase.get();
        let elapsed = now.saturating_sub(since);
        for (i, el) in self.layers.iter().enumerate() {
            let frame = self.timeline.layer(phase, i, elapsed);
            dom::set_style(el, "transform-origin", frame.origin.css());
            dom::set_style(el, "transform", &format!("scaleY({:.4})", frame.coverage));
        }
        let wiping = self.timeline.is_animating(phase, elapsed);

        let fading = match (self.fade_from.get(), self.content()) {
            (Some(from), Some(content)) => {
                let opacity = content_opacity(now.saturating_sub(from));
                dom::set_style(&content, "opacity", &format!("{:.3}", opacity));
                if opacity >= 1.0 {
                    self.fade_from.set(None);
                }
                opacity < 1.0
            }
            _ => false,
        };
        wiping || fading
    }

    fn set_phase(&self, phase: Phase, since: Duration) {
        self.phase.set((phase, since));
        if phase == Phase::Entering && self.document.is_some() {
            self.fade_from.set(Some(since));
        }
        // Every layer blocks: the front one shrinks first on entry.
        let events = if self.timeline.blocks_pointer(phase) {
            "auto"
        } else {
            "none"
        };
        for layer in &self.layers {
            dom::set_style(layer, "pointer-events", events);
        }
    }
}

/// The two-layer wipe drawn over the page. Reacts to phase notifications
/// and only runs animation frames while a wipe or fade is in flight.
pub struct WipeOverlay {
    state: Rc<OverlayState>,
    frames: FrameLoop,
}

impl WipeOverlay {
    pub fn mount(
        document: &web::Document,
        timeline: WipeTimeline,
        clock: Clock,
        initial: (Phase, Duration),
        fade_content: bool,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        let mut layers = Vec::with_capacity(LAYER_COLORS.len());
        for (i, color) in LAYER_COLORS.into_iter().enumerate() {
            let el: web::HtmlElement = document
                .create_element("div")
                .map_err(dom::js_err)?
                .dyn_into()
                .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
            el.set_class_name(WIPE_LAYER_CLASS);
            _ = el.set_attribute("aria-hidden", "true");
            let z = (WIPE_Z_INDEX - i as i32).to_string();
            for (prop, value) in [
                ("position", "fixed"),
                ("inset", "0"),
                ("z-index", z.as_str()),
                ("background", color),
                ("transform", "scaleY(0)"),
                ("transform-origin", "bottom"),
                ("pointer-events", "none"),
                ("will-change", "transform"),
            ] {
                dom::set_style(&el, prop, value);
            }
            body.append_child(&el).map_err(dom::js_err)?;
            layers.push(el);
        }

        let state = OverlayState {
            layers,
            document: fade_content.then(|| document.clone()),
            timeline,
            clock,
            phase: Cell::new(initial),
            fade_from: Cell::new(None),
        };
        let inline_opacity = state
            .content()
            .and_then(|c| c.style().get_property_value("opacity").ok());
        state.fade_from.set(initial_fade(inline_opacity.as_deref(), clock.now()));
        let state = Rc::new(state);
        state.set_phase(initial.0, initial.1);

        let painter = state.clone();
        let frames = FrameLoop::new(move |_| painter.paint());
        frames.start();
        Ok(Self { state, frames })
    }

    /// Phase listener entry point.
    pub fn on_phase(&self, phase: Phase, since: Duration) {
        self.state.set_phase(phase, since);
        self.frames.start();
    }
}

impl Drop for WipeOverlay {
    fn drop(&mut self) {
        self.frames.stop();
        for el in &self.state.layers {
            el.remove();
        }
        if let Some(c) = self.state.content() {
            dom::set_style(&c, "opacity", "1");
        }
    }
}
