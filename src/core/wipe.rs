// Coverage curves for the two-layer wipe that masks navigation, and the
// page content fade that follows it.

use crate::core::config::TransitionTimings;
use crate::core::constants::{CONTENT_FADE_DELAY, CONTENT_FADE_DURATION, WIPE_EASE};
use crate::core::transition::Phase;
use std::time::Duration;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        ((((1.0 - 3.0 * a2 + 3.0 * a1) * t) + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
    }

    #[inline]
    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        3.0 * (1.0 - 3.0 * a2 + 3.0 * a1) * t * t + 2.0 * (3.0 * a2 - 6.0 * a1) * t + 3.0 * a1
    }

    /// Curve parameter whose x equals `x`: Newton steps, then bisection.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-6 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Eased output for a linear progress `x` in \[0, 1\].
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x)).clamp(0.0, 1.0)
    }
}

/// Edge a layer grows from (CSS `transform-origin`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Bottom,
    Top,
}

impl Origin {
    pub fn css(&self) -> &'static str {
        match self {
            Origin::Bottom => "bottom",
            Origin::Top => "top",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    /// Fraction of the viewport covered (CSS `scaleY`).
    pub coverage: f32,
    pub origin: Origin,
}

/// Front-to-back wipe layers: brand color first, white behind it.
pub const LAYER_COLORS: [&str; 2] = ["var(--color-primary, #FF6B1A)", "#FFFFFF"];

pub struct WipeTimeline {
    timings: TransitionTimings,
    curve: CubicBezier,
}

impl WipeTimeline {
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            curve: CubicBezier::new(WIPE_EASE[0], WIPE_EASE[1], WIPE_EASE[2], WIPE_EASE[3]),
        }
    }

    pub fn layer_count(&self) -> usize {
        LAYER_COLORS.len()
    }

    pub fn layer_delay(&self, layer: usize) -> Duration {
        self.timings.stagger * layer as u32
    }

    /// Eased 0..1 progress of one layer, `elapsed` after its phase began.
    pub fn progress(&self, layer: usize, elapsed: Duration) -> f32 {
        let t = elapsed.saturating_sub(self.layer_delay(layer));
        if self.timings.wipe.is_zero() {
            return 1.0;
        }
        let x = (t.as_secs_f32() / self.timings.wipe.as_secs_f32()).min(1.0);
        self.curve.ease(x)
    }

    /// Exiting grows each layer from the bottom; Entering shrinks it
    /// towards the top. Idle leaves the viewport uncovered.
    pub fn layer(&self, phase: Phase, layer: usize, elapsed: Duration) -> LayerFrame {
        match phase {
            Phase::Idle => LayerFrame {
                coverage: 0.0,
                origin: Origin::Bottom,
            },
            Phase::Exiting => LayerFrame {
                coverage: self.progress(layer, elapsed),
                origin: Origin::Bottom,
            },
            Phase::Entering => LayerFrame {
                coverage: 1.0 - self.progress(layer, elapsed),
                origin: Origin::Top,
            },
        }
    }

    /// Total animated span of a phase, last layer included.
    pub fn span(&self) -> Duration {
        self.layer_delay(self.layer_count().saturating_sub(1)) + self.timings.wipe
    }

    pub fn is_animating(&self, phase: Phase, elapsed: Duration) -> bool {
        !phase.is_idle() && elapsed < self.span()
    }

    /// The overlay swallows pointer input until the cycle is back to Idle.
    pub fn blocks_pointer(&self, phase: Phase) -> bool {
        !phase.is_idle()
    }
}

/// When the content fade should start on first load, given the content's
/// inline `opacity`. Content the server already shows is left alone; only
/// content rendered hidden is faded in.
pub fn initial_fade(inline_opacity: Option<&str>, now: Duration) -> Option<Duration> {
    let hidden = inline_opacity
        .and_then(|v| v.trim().parse::<f32>().ok())
        .is_some_and(|o| o < 1.0);
    hidden.then_some(now)
}

/// Opacity of the page content, `elapsed` after it was mounted or revealed.
pub fn content_opacity(elapsed: Duration) -> f32 {
    let t = elapsed.saturating_sub(CONTENT_FADE_DELAY);
    if CONTENT_FADE_DURATION.is_zero() {
        return 1.0;
    }
    (t.as_secs_f32() / CONTENT_FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}
