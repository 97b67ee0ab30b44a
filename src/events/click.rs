use crate::core::{classify, LinkClick, LinkKind};
use crate::dom::EventListener;
use crate::transition::TransitionDriver;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn closest_anchor(ev: &web::MouseEvent) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest("a").ok().flatten()
}

fn read_click(ev: &web::MouseEvent, anchor: &web::Element) -> LinkClick {
    LinkClick {
        href: anchor.get_attribute("href"),
        target: anchor.get_attribute("target"),
        download: anchor.has_attribute("download"),
        modified: ev.ctrl_key()
            || ev.meta_key()
            || ev.shift_key()
            || ev.alt_key()
            || ev.button() != 0,
    }
}

/// Intercept same-document link clicks on the whole document and play them
/// through the transition driver.
pub fn wire_link_clicks(
    document: &web::Document,
    driver: Rc<TransitionDriver>,
) -> anyhow::Result<EventListener> {
    EventListener::new(document, "click", move |ev: web::MouseEvent| {
        if ev.default_prevented() || !ev.cancelable() {
            return;
        }
        let Some(anchor) = closest_anchor(&ev) else {
            return;
        };
        let click = read_click(&ev, &anchor);
        let current = web::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        match classify(&click, &current) {
            LinkKind::Internal(href) => {
                ev.prevent_default();
                driver.request(href);
            }
            kind => log::debug!("[click] pass through {:?} ({:?})", click.href, kind),
        }
    })
}
