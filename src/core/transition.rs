// Page transition state machine: Idle -> Exiting -> (navigate) -> Entering -> Idle.
//
// The sequencer is clock-agnostic. Callers pass monotonic timestamps and
// arm a single timer for `next_deadline()`; when it fires they call
// `advance()` and carry out the returned effects.

use crate::core::config::TransitionTimings;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    Exiting,
    Entering,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Exiting => "exiting",
            Phase::Entering => "entering",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    /// The `(exiting, entering)` flag pair seen by the wipe renderer.
    pub fn flags(&self) -> (bool, bool) {
        (
            matches!(self, Phase::Exiting),
            matches!(self, Phase::Entering),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// New phase and the time it began.
    PhaseChanged(Phase, Duration),
    Navigate(String),
}

pub type Effects = SmallVec<[Effect; 2]>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Pending {
    Navigate { href: String, at: Duration },
    Enter { at: Duration },
    Settle { at: Duration },
}

impl Pending {
    fn at(&self) -> Duration {
        match self {
            Pending::Navigate { at, .. } | Pending::Enter { at } | Pending::Settle { at } => *at,
        }
    }
}

pub struct Sequencer {
    timings: TransitionTimings,
    phase: Phase,
    phase_since: Duration,
    pending: Option<Pending>,
}

impl Sequencer {
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            phase: Phase::Idle,
            phase_since: Duration::ZERO,
            pending: None,
        }
    }

    /// Start a freshly loaded document behind a full cover and reveal it.
    /// Used when the previous document navigated with a full page load.
    pub fn entering(timings: TransitionTimings, now: Duration) -> Self {
        Self {
            timings,
            phase: Phase::Entering,
            phase_since: now,
            pending: Some(Pending::Settle {
                at: now + timings.reveal,
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When the current phase began.
    pub fn phase_since(&self) -> Duration {
        self.phase_since
    }

    #[cfg_attr(not(test), allow(dead_code))]
    /// Target of the navigation still waiting for the cover, if any.
    pub fn pending_href(&self) -> Option<&str> {
        match &self.pending {
            Some(Pending::Navigate { href, .. }) => Some(href),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(Pending::at)
    }

    /// An intercepted link click. While already exiting, the pending
    /// navigation is retargeted and its cover timer restarted; the exit
    /// wipe keeps running. From Idle or Entering a new exit begins.
    pub fn request(&mut self, href: impl Into<String>, now: Duration) -> Effects {
        let href = href.into();
        let mut out = Effects::new();
        let at = now + self.timings.cover;
        match self.phase {
            Phase::Exiting => {
                log::debug!("[transition] retarget to {} while exiting", href);
            }
            Phase::Idle | Phase::Entering => {
                self.set_phase(Phase::Exiting, now, &mut out);
            }
        }
        self.pending = Some(Pending::Navigate { href, at });
        out
    }

    /// Fire every step whose deadline has passed, in order. Deadlines chain
    /// from the scheduled time of the previous step, not from `now`.
    pub fn advance(&mut self, now: Duration) -> Effects {
        let mut out = Effects::new();
        while let Some(p) = self.pending.take() {
            if p.at() > now {
                self.pending = Some(p);
                break;
            }
            match p {
                Pending::Navigate { href, at } => {
                    out.push(Effect::Navigate(href));
                    self.pending = Some(Pending::Enter {
                        at: at + self.timings.settle,
                    });
                }
                Pending::Enter { at } => {
                    self.set_phase(Phase::Entering, at, &mut out);
                    self.pending = Some(Pending::Settle {
                        at: at + self.timings.reveal,
                    });
                }
                Pending::Settle { at } => {
                    self.set_phase(Phase::Idle, at, &mut out);
                }
            }
        }
        out
    }

    /// Drop all pending steps and return to Idle. Used on teardown.
    pub fn cancel(&mut self, now: Duration) -> Effects {
        let mut out = Effects::new();
        self.pending = None;
        self.set_phase(Phase::Idle, now, &mut out);
        out
    }

    fn set_phase(&mut self, phase: Phase, at: Duration, out: &mut Effects) {
        if self.phase != phase {
            log::debug!(
                "[transition] {} -> {} at {}ms",
                self.phase.as_str(),
                phase.as_str(),
                at.as_millis()
            );
            self.phase = phase;
            self.phase_since = at;
            out.push(Effect::PhaseChanged(phase, at));
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener = Rc<RefCell<dyn FnMut(Phase, Duration)>>;

/// Typed observer store for phase changes. Renderers subscribe instead of
/// polling the sequencer every frame.
///
/// Listeners may subscribe, unsubscribe or publish from inside a
/// notification: no borrow is held while they run, and nested publishes are
/// queued and delivered in order once the current one has reached everyone.
#[derive(Default)]
pub struct PhaseBus {
    next_id: Cell<u64>,
    listeners: RefCell<FnvHashMap<u64, Listener>>,
    queue: RefCell<VecDeque<(Phase, Duration)>>,
    publishing: Cell<bool>,
}

impl PhaseBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(Phase, Duration) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let listener: Listener = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().insert(id, listener);
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.borrow_mut().remove(&id.0).is_some()
    }

    /// Notify every listener, in subscription order, of a phase that began
    /// at `since`.
    pub fn publish(&self, phase: Phase, since: Duration) {
        self.queue.borrow_mut().push_back((phase, since));
        if self.publishing.replace(true) {
            return;
        }
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some((phase, since)) = next else {
                break;
            };
            let mut ids: SmallVec<[u64; 4]> = self.listeners.borrow().keys().copied().collect();
            ids.sort_unstable();
            for id in ids {
                // Skips listeners removed earlier in this round.
                let listener = self.listeners.borrow().get(&id).cloned();
                if let Some(listener) = listener {
                    let mut notify = listener.borrow_mut();
                    (&mut *notify)(phase, since);
                }
            }
        }
        self.publishing.set(false);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}
