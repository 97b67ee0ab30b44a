use glam::Vec2;

/// Latest two pointer samples. Only the most recent sample matters; there
/// is no queue and no smoothing between samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    previous: Option<Vec2>,
    current: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move sample. The first sample seeds both points so
    /// that the pointer does not appear to jump in from the origin.
    pub fn record(&mut self, pos: Vec2) {
        self.previous = Some(self.current.unwrap_or(pos));
        self.current = Some(pos);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn position(&self) -> Option<Vec2> {
        self.current
    }

    /// Step between the two latest samples, without consuming it. Several
    /// moves within one frame count only as their last step.
    pub fn delta(&self) -> Vec2 {
        match (self.previous, self.current) {
            (Some(p), Some(c)) => c - p,
            _ => Vec2::ZERO,
        }
    }

    /// Read the current frame's pointer state and mark the movement as
    /// consumed, so a pointer that stops moving yields a zero delta.
    pub fn take_frame(&mut self) -> PointerFrame {
        let frame = PointerFrame {
            position: self.current,
            delta: self.delta(),
        };
        self.previous = self.current;
        frame
    }
}

/// Pointer input seen by one simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerFrame {
    pub position: Option<Vec2>,
    pub delta: Vec2,
}

impl PointerFrame {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn still(position: Vec2) -> Self {
        Self {
            position: Some(position),
            delta: Vec2::ZERO,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn moved(from: Vec2, to: Vec2) -> Self {
        Self {
            position: Some(to),
            delta: to - from,
        }
    }
}
