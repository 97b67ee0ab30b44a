// DOM hooks and browser-side settings for the web front-end.

// Elements the host page provides
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PAGE_CONTENT_ID: &str = "page-content"; // optional, faded in on entry or when rendered hidden

// Wipe overlay layers are created at runtime
pub const WIPE_LAYER_CLASS: &str = "page-wipe";
pub const WIPE_Z_INDEX: i32 = 9999; // front layer; each following layer sits one below

// Media queries gating the effects
pub const MOBILE_QUERY: &str = "(max-width: 768px)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// sessionStorage marker carried across a full-document navigation
pub const ENTRY_MARKER_KEY: &str = "studio-fx:entering";

// `data-*` overrides read from the canvas (particles) and <body> (transition)
pub const PARTICLE_OVERRIDE_KEYS: [&str; 6] = [
    "particle-count",
    "drift-speed",
    "pointer-radius",
    "push-strength",
    "impulse-decay",
    "return-factor",
];
pub const TRANSITION_OVERRIDE_KEYS: [&str; 5] =
    ["cover-ms", "settle-ms", "reveal-ms", "wipe-ms", "stagger-ms"];
