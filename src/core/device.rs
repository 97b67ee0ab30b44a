use crate::core::constants::MOBILE_MAX_WIDTH;

/// What the current device and user preferences allow us to animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    pub mobile: bool,
    pub reduced_motion: bool,
}

impl DeviceProfile {
    pub fn from_viewport(width: f64, reduced_motion: bool) -> Self {
        Self {
            mobile: width <= MOBILE_MAX_WIDTH,
            reduced_motion,
        }
    }

    /// The particle field is desktop-only and respects reduced motion.
    pub fn should_render_particles(&self) -> bool {
        !self.mobile && !self.reduced_motion
    }

    /// Whether wipes animate or snap.
    pub fn should_animate(&self) -> bool {
        !self.reduced_motion
    }
}
