use std::time::Duration;

// Particle physics and transition timing constants.
//
// The physics values are per-frame factors tuned for a ~60 Hz
// animation-frame rate; they are applied once per frame, not scaled by
// elapsed time.

// Field population
pub const PARTICLE_COUNT: usize = 15;

// Anchor drift: each velocity component is uniform in [-DRIFT_SPEED_MAX, DRIFT_SPEED_MAX)
pub const DRIFT_SPEED_MAX: f32 = 0.25;

// Disc radius range in CSS pixels
pub const RADIUS_MIN: f32 = 3.0;
pub const RADIUS_MAX: f32 = 9.0;
pub const GLOW_BLUR_PER_RADIUS: f32 = 3.0; // shadow blur = radius * this

// Pointer interaction
pub const POINTER_RADIUS: f32 = 80.0; // proximity radius in pixels
pub const PUSH_STRENGTH: f32 = 2.5; // impulse per pixel of pointer movement

// Damping and spring return (per frame)
pub const IMPULSE_DECAY: f32 = 0.92;
pub const RETURN_FACTOR: f32 = 0.05;

// Palette: (fill, glow)
pub const PALETTE: [(&str, &str); 4] = [
    ("#FF6B1A", "rgba(255, 107, 26, 0.6)"), // orange
    ("#FF8A4C", "rgba(255, 138, 76, 0.6)"), // light orange
    ("#5BA4D4", "rgba(91, 164, 212, 0.4)"), // sky blue
    ("#7BC74D", "rgba(123, 199, 77, 0.4)"), // green
];

// Transition timeline
pub const COVER_DURATION: Duration = Duration::from_millis(700); // click -> navigate
pub const SETTLE_DELAY: Duration = Duration::from_millis(50); // navigate -> Entering
pub const REVEAL_DURATION: Duration = Duration::from_millis(1000); // Entering -> Idle

// Wipe layers
pub const WIPE_DURATION: Duration = Duration::from_millis(500);
pub const WIPE_STAGGER: Duration = Duration::from_millis(150);
pub const WIPE_EASE: [f32; 4] = [0.22, 1.0, 0.36, 1.0]; // cubic-bezier control points

// Page content fade-in
pub const CONTENT_FADE_DELAY: Duration = Duration::from_millis(300);
pub const CONTENT_FADE_DURATION: Duration = Duration::from_millis(500);

// Device gating
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
