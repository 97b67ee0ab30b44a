// Host-side tests for the page transition sequencer.
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
}

use crate::core::config::TransitionTimings;
use crate::core::transition::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn navigations(effects: &Effects) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Navigate(h) => Some(h.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn full_cycle_follows_fixed_timeline() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    assert_eq!(seq.phase(), Phase::Idle);

    let fx = seq.request("/fr/about", ms(0));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Exiting, ms(0))]);
    assert_eq!(seq.next_deadline(), Some(ms(700)));

    assert!(seq.advance(ms(699)).is_empty(), "no navigation before the cover");
    assert_eq!(seq.phase(), Phase::Exiting);

    let fx = seq.advance(ms(700));
    assert_eq!(fx.as_slice(), &[Effect::Navigate("/fr/about".into())]);
    assert_eq!(seq.phase(), Phase::Exiting);
    assert_eq!(seq.next_deadline(), Some(ms(750)));

    let fx = seq.advance(ms(750));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Entering, ms(750))]);
    assert_eq!(seq.phase().flags(), (false, true));

    assert!(seq.advance(ms(1749)).is_empty());
    let fx = seq.advance(ms(1750));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Idle, ms(1750))]);
    assert_eq!(seq.next_deadline(), None);
}

#[test]
fn late_timer_replays_every_step_in_order() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    seq.request("/en/games/aetheris", ms(100));
    let fx = seq.advance(ms(5_000));
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::Navigate("/en/games/aetheris".into()),
            Effect::PhaseChanged(Phase::Entering, ms(850)),
            Effect::PhaseChanged(Phase::Idle, ms(1850)),
        ]
    );
}

#[test]
fn click_while_exiting_retargets_and_restarts_cover() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    seq.request("/fr/about", ms(0));
    let fx = seq.request("/fr/contact", ms(400));
    assert!(fx.is_empty(), "exit wipe is not replayed");
    assert_eq!(seq.phase(), Phase::Exiting);
    assert_eq!(seq.phase_since(), ms(0));
    assert_eq!(seq.pending_href(), Some("/fr/contact"));

    assert!(navigations(&seq.advance(ms(700))).is_empty());
    let fx = seq.advance(ms(1100));
    assert_eq!(navigations(&fx), vec!["/fr/contact".to_string()]);
}

#[test]
fn navigation_fires_once_per_cycle() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    seq.request("/en", ms(0));
    let mut all = Vec::new();
    for t in (0..3_000).step_by(16) {
        all.extend(navigations(&seq.advance(ms(t))));
    }
    assert_eq!(all, vec!["/en".to_string()]);
    assert!(seq.phase().is_idle());
}

#[test]
fn click_while_entering_starts_new_exit() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    seq.request("/fr/about", ms(0));
    seq.advance(ms(800));
    assert_eq!(seq.phase(), Phase::Entering);

    let fx = seq.request("/fr", ms(900));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Exiting, ms(900))]);
    assert_eq!(seq.next_deadline(), Some(ms(1600)));
}

#[test]
fn cancel_lifts_cover_and_drops_timers() {
    let mut seq = Sequencer::new(TransitionTimings::default());
    seq.request("/fr/about", ms(0));
    let fx = seq.cancel(ms(300));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Idle, ms(300))]);
    assert_eq!(seq.next_deadline(), None);
    assert!(seq.advance(ms(10_000)).is_empty());

    // Cancelling while idle is silent
    assert!(seq.cancel(ms(400)).is_empty());
}

#[test]
fn document_entry_reveals_then_idles() {
    let mut seq = Sequencer::entering(TransitionTimings::default(), ms(20));
    assert_eq!(seq.phase(), Phase::Entering);
    assert_eq!(seq.next_deadline(), Some(ms(1020)));
    let fx = seq.advance(ms(1020));
    assert_eq!(fx.as_slice(), &[Effect::PhaseChanged(Phase::Idle, ms(1020))]);
}

#[test]
fn custom_timings_drive_the_schedule() {
    let timings = TransitionTimings {
        cover: ms(900),
        settle: ms(10),
        reveal: ms(500),
        ..TransitionTimings::default()
    };
    let mut seq = Sequencer::new(timings);
    seq.request("/en/about", ms(0));
    assert_eq!(seq.next_deadline(), Some(ms(900)));
    seq.advance(ms(900));
    assert_eq!(seq.next_deadline(), Some(ms(910)));
    seq.advance(ms(910));
    assert_eq!(seq.next_deadline(), Some(ms(1410)));
}

#[test]
fn bus_notifies_subscribers_until_unsubscribed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let bus = PhaseBus::new();
    let sink = seen.clone();
    let id = bus.subscribe(move |phase, since| sink.borrow_mut().push((phase, since)));
    assert_eq!(bus.len(), 1);

    bus.publish(Phase::Exiting, ms(0));
    bus.publish(Phase::Entering, ms(750));
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.publish(Phase::Idle, ms(1750));

    assert_eq!(
        *seen.borrow(),
        vec![(Phase::Exiting, ms(0)), (Phase::Entering, ms(750))]
    );
    assert!(bus.is_empty());
}

#[test]
fn listeners_may_subscribe_and_publish_while_notified() {
    let bus = Rc::new(PhaseBus::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let inner = bus.clone();
    let log = seen.clone();
    bus.subscribe(move |phase, since| {
        log.borrow_mut().push(("first", phase));
        if phase == Phase::Idle {
            let late = log.clone();
            inner.subscribe(move |phase, _| late.borrow_mut().push(("late", phase)));
            // A click handled from inside the notification.
            inner.publish(Phase::Exiting, since + ms(5));
        }
    });
    let log = seen.clone();
    bus.subscribe(move |phase, _| log.borrow_mut().push(("second", phase)));

    bus.publish(Phase::Idle, ms(1750));

    assert_eq!(
        *seen.borrow(),
        vec![
            ("first", Phase::Idle),
            ("second", Phase::Idle),
            ("first", Phase::Exiting),
            ("second", Phase::Exiting),
            ("late", Phase::Exiting),
        ]
    );
    assert_eq!(bus.len(), 3);
}

#[test]
fn listener_may_unsubscribe_itself_and_others() {
    let bus = Rc::new(PhaseBus::new());
    let calls = Rc::new(RefCell::new(Vec::new()));
    let ids = Rc::new(RefCell::new(Vec::new()));

    let inner = bus.clone();
    let (log, handles) = (calls.clone(), ids.clone());
    let first = bus.subscribe(move |_, _| {
        log.borrow_mut().push("first");
        for id in handles.borrow().iter() {
            inner.unsubscribe(*id);
        }
    });
    let log = calls.clone();
    let second = bus.subscribe(move |_, _| log.borrow_mut().push("second"));
    ids.borrow_mut().extend([first, second]);

    bus.publish(Phase::Exiting, ms(0));
    bus.publish(Phase::Entering, ms(750));

    assert_eq!(*calls.borrow(), vec!["first"]);
    assert!(bus.is_empty());
}

#[test]
fn phase_flags_match_exit_and_entry() {
    assert_eq!(Phase::Idle.flags(), (false, false));
    assert_eq!(Phase::Exiting.flags(), (true, false));
    assert_eq!(Phase::Entering.flags(), (false, true));
    assert_eq!(Phase::Entering.as_str(), "entering");
}
