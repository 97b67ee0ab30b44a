// Host-side tests for the wipe coverage curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod transition {
        include!("../src/core/transition.rs");
    }
    pub mod wipe {
        include!("../src/core/wipe.rs");
    }
}

use crate::core::config::TransitionTimings;
use crate::core::transition::Phase;
use crate::core::wipe::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timeline() -> WipeTimeline {
    WipeTimeline::new(TransitionTimings::default())
}

#[test]
fn easing_hits_endpoints_and_rises() {
    let curve = CubicBezier::new(0.22, 1.0, 0.36, 1.0);
    assert_eq!(curve.ease(0.0), 0.0);
    assert_eq!(curve.ease(1.0), 1.0);
    let mut last = 0.0;
    for i in 1..100 {
        let y = curve.ease(i as f32 / 100.0);
        assert!(y >= last, "not monotonic at {}", i);
        assert!(y <= 1.0);
        last = y;
    }
    // Front-loaded ease-out
    assert!(curve.ease(0.5) > 0.8);
}

#[test]
fn linear_bezier_is_identity() {
    let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    for x in [0.1_f32, 0.25, 0.5, 0.9] {
        assert!((curve.ease(x) - x).abs() < 1e-3, "{}", x);
    }
}

#[test]
fn exit_layers_grow_from_bottom_with_stagger() {
    let t = timeline();
    let front = t.layer(Phase::Exiting, 0, ms(0));
    assert_eq!(front.coverage, 0.0);
    assert_eq!(front.origin, Origin::Bottom);

    assert_eq!(t.layer(Phase::Exiting, 0, ms(500)).coverage, 1.0);
    assert_eq!(t.layer(Phase::Exiting, 1, ms(150)).coverage, 0.0);
    assert!(t.layer(Phase::Exiting, 1, ms(400)).coverage < 1.0);
    assert_eq!(t.layer(Phase::Exiting, 1, ms(650)).coverage, 1.0);
}

#[test]
fn both_layers_cover_before_navigation() {
    let timings = TransitionTimings::default();
    let t = WipeTimeline::new(timings);
    assert!(t.span() <= timings.cover);
    for layer in 0..t.layer_count() {
        assert_eq!(t.layer(Phase::Exiting, layer, timings.cover).coverage, 1.0);
    }
}

#[test]
fn entry_layers_shrink_towards_top() {
    let t = timeline();
    let front = t.layer(Phase::Entering, 0, ms(0));
    assert_eq!(front.coverage, 1.0);
    assert_eq!(front.origin, Origin::Top);
    assert_eq!(t.layer(Phase::Entering, 1, ms(100)).coverage, 1.0, "second layer waits");
    assert_eq!(t.layer(Phase::Entering, 0, ms(500)).coverage, 0.0);
    assert_eq!(t.layer(Phase::Entering, 1, ms(650)).coverage, 0.0);
}

#[test]
fn idle_is_uncovered_and_not_animating() {
    let t = timeline();
    assert_eq!(t.layer(Phase::Idle, 0, ms(10)).coverage, 0.0);
    assert!(!t.is_animating(Phase::Idle, ms(0)));
    assert!(!t.blocks_pointer(Phase::Idle));
    assert!(t.blocks_pointer(Phase::Exiting));
    assert!(t.blocks_pointer(Phase::Entering));
}

#[test]
fn animation_window_covers_both_layers() {
    let t = timeline();
    assert_eq!(t.span(), ms(650));
    assert!(t.is_animating(Phase::Exiting, ms(649)));
    assert!(!t.is_animating(Phase::Exiting, ms(650)));
}

#[test]
fn reduced_motion_snaps() {
    let t = WipeTimeline::new(TransitionTimings::default().reduced_motion());
    assert_eq!(t.layer(Phase::Exiting, 1, ms(0)).coverage, 1.0);
    assert_eq!(t.layer(Phase::Entering, 0, ms(0)).coverage, 0.0);
    assert!(!t.is_animating(Phase::Exiting, ms(0)));
}

#[test]
fn back_layer_still_blocks_once_front_has_lifted() {
    let t = timeline();
    // 500 ms into the reveal: front layer gone, white layer still up.
    assert_eq!(t.layer(Phase::Entering, 0, ms(500)).coverage, 0.0);
    assert!(t.layer(Phase::Entering, 1, ms(500)).coverage > 0.0);
    assert!(t.blocks_pointer(Phase::Entering));
    assert!(!t.blocks_pointer(Phase::Idle));
}

#[test]
fn visible_content_is_not_faded_on_load() {
    assert_eq!(initial_fade(None, ms(40)), None);
    assert_eq!(initial_fade(Some(""), ms(40)), None);
    assert_eq!(initial_fade(Some("1"), ms(40)), None);
    assert_eq!(initial_fade(Some("bogus"), ms(40)), None);
}

#[test]
fn hidden_content_fades_in_from_mount() {
    let from = initial_fade(Some("0"), ms(40)).unwrap();
    assert_eq!(from, ms(40));
    assert_eq!(content_opacity(ms(340).saturating_sub(from)), 0.0);
    assert_eq!(content_opacity(ms(840).saturating_sub(from)), 1.0);
    assert_eq!(initial_fade(Some(" 0.2 "), ms(0)), Some(ms(0)));
}

#[test]
fn content_fades_in_after_delay() {
    assert_eq!(content_opacity(ms(0)), 0.0);
    assert_eq!(content_opacity(ms(300)), 0.0);
    assert!((content_opacity(ms(550)) - 0.5).abs() < 1e-3);
    assert_eq!(content_opacity(ms(800)), 1.0);
    assert_eq!(content_opacity(ms(5_000)), 1.0);
}
