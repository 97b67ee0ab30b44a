/// Bookkeeping for an animation-frame loop that can pause and be torn down.
///
/// The host scheduler (`requestAnimationFrame` on the web) hands out ids
/// and may still deliver a callback that was already queued when the loop
/// stopped. `fire` filters those out so no frame work runs after `stop`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ticker {
    pending: Option<i32>,
    active: bool,
    frames: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the loop active. Returns true when the caller must request a
    /// frame (nothing is queued yet).
    pub fn start(&mut self) -> bool {
        self.active = true;
        self.pending.is_none()
    }

    pub fn scheduled(&mut self, id: i32) {
        self.pending = Some(id);
    }

    /// A frame callback arrived. Returns whether frame work may run.
    pub fn fire(&mut self) -> bool {
        self.pending = None;
        if self.active {
            self.frames += 1;
        }
        self.active
    }

    /// After the frame work: `keep_going == false` pauses the loop.
    /// Returns true when the next frame must be requested.
    pub fn finish(&mut self, keep_going: bool) -> bool {
        if !keep_going {
            self.active = false;
        }
        self.active && self.pending.is_none()
    }

    /// Deactivate and hand back the queued request id for cancellation.
    pub fn stop(&mut self) -> Option<i32> {
        self.active = false;
        self.pending.take()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg_attr(not(test), allow(dead_code))]
    /// Frames whose work actually ran.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
