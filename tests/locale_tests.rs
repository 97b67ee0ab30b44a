// Host-side tests for locale negotiation and prefix routing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod locale {
    include!("../src/core/locale.rs");
}

use locale::*;

#[test]
fn negotiates_on_primary_subtag() {
    assert_eq!(negotiate(&["en-GB", "fr"]), Locale::En);
    assert_eq!(negotiate(&["de-DE", "fr-CA"]), Locale::Fr);
    assert_eq!(negotiate(&["EN_us"]), Locale::En);
}

#[test]
fn falls_back_to_french() {
    assert_eq!(negotiate(&["de", "ja"]), Locale::Fr);
    assert_eq!(negotiate::<&str>(&[]), Locale::Fr);
}

#[test]
fn root_redirects_to_negotiated_locale() {
    assert_eq!(route("/", &["en-US"]), LocaleRoute::Redirect("/en".into()));
    assert_eq!(route("/", &["it"]), LocaleRoute::Redirect("/fr".into()));
}

#[test]
fn unprefixed_paths_keep_rest_and_query() {
    assert_eq!(
        route("/games/aetheris?ref=press", &["en"]),
        LocaleRoute::Redirect("/en/games/aetheris?ref=press".into())
    );
}

#[test]
fn prefixed_paths_are_left_alone() {
    assert_eq!(route("/fr/about", &["en"]), LocaleRoute::Localized(Locale::Fr));
    assert_eq!(route("/en", &["fr"]), LocaleRoute::Localized(Locale::En));
}

#[test]
fn assets_and_internals_are_excluded() {
    for path in [
        "/_next/static/chunk.js",
        "/_vercel/insights",
        "/api/contact",
        "/robots.txt",
        "/images/hero.webp",
    ] {
        assert_eq!(route(path, &["en"]), LocaleRoute::Excluded, "{}", path);
    }
}

#[test]
fn locale_prefix_detection() {
    assert_eq!(Locale::of_path("/en/about"), Some(Locale::En));
    assert_eq!(Locale::of_path("/english"), None);
    assert_eq!(Locale::from_code("FR"), Some(Locale::Fr));
}
