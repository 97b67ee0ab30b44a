pub mod config;
pub mod constants;
pub mod device;
pub mod links;
pub mod locale;
pub mod particles;
pub mod pointer;
pub mod ticker;
pub mod transition;
pub mod wipe;

pub use config::{ConfigError, ParticleConfig, TransitionTimings};
pub use device::DeviceProfile;
pub use links::{classify, LinkClick, LinkKind};
pub use locale::{Locale, LocaleRoute};
pub use particles::{Particle, ParticleField, Surface, Swatch};
pub use pointer::{PointerFrame, PointerTracker};
pub use ticker::Ticker;
pub use transition::{Effect, Phase, PhaseBus, Sequencer};
pub use wipe::WipeTimeline;
