use crate::core::locale::{self, LocaleRoute};
use wasm_bindgen::JsValue;
use web_sys as web;

fn preferred_languages(window: &web::Window) -> Vec<String> {
    let nav = window.navigator();
    let mut langs: Vec<String> = nav
        .languages()
        .iter()
        .filter_map(|v: JsValue| v.as_string())
        .collect();
    if langs.is_empty() {
        langs.extend(nav.language());
    }
    langs
}

/// Send unprefixed paths to their locale. Returns true when a redirect was
/// issued and the rest of start-up should be skipped.
pub fn apply_locale_redirect(window: &web::Window) -> bool {
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    match locale::route(&format!("{}{}", path, search), &preferred_languages(window)) {
        LocaleRoute::Redirect(target) => {
            let target = format!("{}{}", target, hash);
            log::info!("[locale] {} -> {}", path, target);
            if let Err(e) = location.replace(&target) {
                log::warn!("[locale] redirect failed: {:?}", e);
                return false;
            }
            true
        }
        LocaleRoute::Localized(l) => {
            log::debug!("[locale] {}", l.code());
            false
        }
        LocaleRoute::Excluded => false,
    }
}
