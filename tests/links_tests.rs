// Host-side tests for link click classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod links {
    include!("../src/core/links.rs");
}

use links::*;

#[test]
fn internal_link_is_intercepted() {
    let kind = classify(&LinkClick::to("/fr/about"), "/fr");
    assert_eq!(kind, LinkKind::Internal("/fr/about".into()));
    assert!(kind.is_intercepted());
}

#[test]
fn absolute_urls_pass_through() {
    for href in [
        "http://example.com",
        "https://store.steampowered.com/app/1",
        "//cdn.example.com/press-kit.zip",
        "mailto:contact@studio.example",
        "tel:+33100000000",
    ] {
        assert_eq!(classify(&LinkClick::to(href), "/fr"), LinkKind::External, "{}", href);
    }
}

#[test]
fn new_context_targets_pass_through() {
    let click = LinkClick::to("/fr/about").with_target("_blank");
    assert_eq!(classify(&click, "/fr"), LinkKind::External);

    let click = LinkClick::to("/fr/about").with_target("_self");
    assert!(classify(&click, "/fr").is_intercepted());
}

#[test]
fn downloads_and_modified_clicks_pass_through() {
    let mut click = LinkClick::to("/press/kit");
    click.download = true;
    assert_eq!(classify(&click, "/fr"), LinkKind::External);

    let mut click = LinkClick::to("/fr/about");
    click.modified = true;
    assert_eq!(classify(&click, "/fr"), LinkKind::External);
}

#[test]
fn same_page_links_pass_through() {
    assert_eq!(classify(&LinkClick::to("/fr/about"), "/fr/about"), LinkKind::SamePage);
    assert_eq!(classify(&LinkClick::to("/fr/about/"), "/fr/about"), LinkKind::SamePage);
    assert_eq!(classify(&LinkClick::to("#team"), "/fr/about"), LinkKind::SamePage);
    assert_eq!(classify(&LinkClick::to("/fr/about#team"), "/fr/about"), LinkKind::SamePage);
    assert_eq!(classify(&LinkClick::to("/"), "/"), LinkKind::SamePage);
}

#[test]
fn missing_href_is_ignored() {
    assert_eq!(classify(&LinkClick::default(), "/fr"), LinkKind::Missing);
    assert_eq!(classify(&LinkClick::to("  "), "/fr"), LinkKind::Missing);
}

#[test]
fn absolute_detection() {
    assert!(is_absolute("https://a.b"));
    assert!(is_absolute("//a.b"));
    assert!(is_absolute("web+app:thing"));
    assert!(!is_absolute("/fr/about"));
    assert!(!is_absolute("about"));
    assert!(!is_absolute("/fr/search?q=a:b"));
}
