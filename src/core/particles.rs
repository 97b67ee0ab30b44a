use crate::core::config::ParticleConfig;
use crate::core::constants::{GLOW_BLUR_PER_RADIUS, PALETTE};
use crate::core::pointer::PointerFrame;
use glam::Vec2;
use rand::Rng;

/// Fill and glow colors of a particle, as CSS color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub color: &'static str,
    pub glow: &'static str,
}

impl Swatch {
    pub fn palette(index: usize) -> Self {
        let (color, glow) = PALETTE[index % PALETTE.len()];
        Self { color, glow }
    }
}

/// Drawing target for the field. The web front-end implements this on a
/// 2D canvas context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn glow_disc(&mut self, center: Vec2, radius: f32, swatch: Swatch, blur: f32);
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub id: usize,
    pub position: Vec2,
    pub anchor: Vec2,
    pub anchor_velocity: Vec2,
    pub impulse: Vec2,
    pub radius: f32,
    pub swatch: Swatch,
}

impl Particle {
    /// A particle resting on its anchor with no impulse.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn at(
        id: usize,
        position: Vec2,
        anchor_velocity: Vec2,
        radius: f32,
        swatch: Swatch,
    ) -> Self {
        Self {
            id,
            position,
            anchor: position,
            anchor_velocity,
            impulse: Vec2::ZERO,
            radius,
            swatch,
        }
    }

    fn random(id: usize, bounds: Vec2, config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let drift = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * config.drift_speed_max,
            (rng.gen::<f32>() - 0.5) * 2.0 * config.drift_speed_max,
        );
        let radius = config.radius_min + rng.gen::<f32>() * (config.radius_max - config.radius_min);
        let swatch = Swatch::palette(rng.gen_range(0..PALETTE.len()));
        Self::at(id, position, drift, radius, swatch)
    }

    /// Move the anchor and bounce it off the bounds, one axis at a time.
    fn drift(&mut self, bounds: Vec2) {
        self.anchor += self.anchor_velocity;
        if self.anchor.x < 0.0 || self.anchor.x > bounds.x {
            self.anchor_velocity.x = -self.anchor_velocity.x;
        }
        if self.anchor.y < 0.0 || self.anchor.y > bounds.y {
            self.anchor_velocity.y = -self.anchor_velocity.y;
        }
        self.anchor = self.anchor.clamp(Vec2::ZERO, bounds);
    }

    /// Shove the particle along the pointer's movement when the pointer is
    /// within `radius` of its rendered position.
    fn push(&mut self, pointer: &PointerFrame, radius: f32, strength: f32) {
        let Some(at) = pointer.position else {
            return;
        };
        let distance = at.distance(self.position);
        if distance < radius && distance > 0.0 {
            self.impulse += pointer.delta * strength;
        }
    }

    fn integrate(&mut self, decay: f32, return_factor: f32) {
        self.position += self.impulse;
        self.impulse *= decay;
        self.position += (self.anchor - self.position) * return_factor;
    }

    pub fn blur(&self) -> f32 {
        self.radius * GLOW_BLUR_PER_RADIUS
    }
}

/// Fixed-size population of particles over a rectangular viewport.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new(bounds: Vec2, config: ParticleConfig, rng: &mut impl Rng) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let particles = (0..config.count)
            .map(|id| Particle::random(id, bounds, &config, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[particles] created {} over {}x{}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Self {
            particles,
            bounds,
            config,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_particles(bounds: Vec2, config: ParticleConfig, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bounds: bounds.max(Vec2::ZERO),
            config,
        }
    }

    /// Follow a viewport resize. Anchors are pulled back inside on the next
    /// tick by the clamp in `drift`.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: &PointerFrame) {
        let ParticleConfig {
            pointer_radius,
            push_strength,
            impulse_decay,
            return_factor,
            ..
        } = self.config;
        for p in &mut self.particles {
            p.drift(self.bounds);
            p.push(pointer, pointer_radius, push_strength);
            p.integrate(impulse_decay, return_factor);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        for p in &self.particles {
            surface.glow_disc(p.position, p.radius, p.swatch, p.blur());
        }
    }

    /// Wipe the whole viewport, leaving no particle behind.
    pub fn erase(&self, surface: &mut impl Surface) {
        surface.clear(self.bounds);
    }

    /// One animation frame: clear, update all particles, then draw them.
    pub fn frame(&mut self, pointer: &PointerFrame, surface: &mut impl Surface) {
        self.erase(surface);
        self.step(pointer);
        self.render(surface);
    }
}
