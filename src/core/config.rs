// Runtime-tunable configuration for the particle field and the transition
// sequencer. Defaults come from `core::constants`; hosts may override
// individual values through `data-*` attributes.

use crate::core::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` must lie in {min}..={max}, got {got}")]
    OutOfRange {
        key: &'static str,
        min: f32,
        max: f32,
        got: f32,
    },
    #[error("cover duration {cover_ms} ms is shorter than the exit wipe ({wipe_ms} ms)")]
    CoverTooShort { cover_ms: u64, wipe_ms: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub drift_speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub pointer_radius: f32,
    pub push_strength: f32,
    pub impulse_decay: f32,
    pub return_factor: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            drift_speed_max: DRIFT_SPEED_MAX,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            pointer_radius: POINTER_RADIUS,
            push_strength: PUSH_STRENGTH,
            impulse_decay: IMPULSE_DECAY,
            return_factor: RETURN_FACTOR,
        }
    }
}

impl ParticleConfig {
    /// Apply a single `key=value` override. Keys use the kebab-case form of
    /// the `data-*` attribute without the prefix (`particle-count`, ...).
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "particle-count" => {
                let n: usize = parse(key, value)?;
                if n > 500 {
                    return Err(ConfigError::OutOfRange {
                        key: "particle-count",
                        min: 0.0,
                        max: 500.0,
                        got: n as f32,
                    });
                }
                self.count = n;
            }
            "drift-speed" => {
                self.drift_speed_max = ranged("drift-speed", parse(key, value)?, 0.0, 10.0)?
            }
            "pointer-radius" => {
                self.pointer_radius = ranged("pointer-radius", parse(key, value)?, 0.0, 1000.0)?
            }
            "push-strength" => {
                self.push_strength = ranged("push-strength", parse(key, value)?, 0.0, 20.0)?
            }
            "impulse-decay" => {
                // 1.0 would never settle
                self.impulse_decay = ranged("impulse-decay", parse(key, value)?, 0.0, 0.999)?
            }
            "return-factor" => {
                self.return_factor = ranged("return-factor", parse(key, value)?, 0.0, 1.0)?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override in turn; invalid entries are reported and skipped.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        for (k, v) in overrides {
            if let Err(e) = self.apply_override(k, v) {
                errors.push(e);
            }
        }
        (self, errors)
    }
}

/// Delays of the transition timeline plus the wipe animation timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTimings {
    pub cover: Duration,
    pub settle: Duration,
    pub reveal: Duration,
    pub wipe: Duration,
    pub stagger: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            cover: COVER_DURATION,
            settle: SETTLE_DELAY,
            reveal: REVEAL_DURATION,
            wipe: WIPE_DURATION,
            stagger: WIPE_STAGGER,
        }
    }
}

impl TransitionTimings {
    /// Wipes that snap instantly, for `prefers-reduced-motion`.
    pub fn reduced_motion(self) -> Self {
        Self {
            wipe: Duration::ZERO,
            stagger: Duration::ZERO,
            ..self
        }
    }

    /// Time for the second, delayed layer to finish covering the viewport.
    pub fn full_cover(&self) -> Duration {
        self.stagger + self.wipe
    }

    /// The navigation must not fire before both layers cover the viewport.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cover < self.full_cover() {
            return Err(ConfigError::CoverTooShort {
                cover_ms: self.cover.as_millis() as u64,
                wipe_ms: self.full_cover().as_millis() as u64,
            });
        }
        Ok(())
    }

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let slot = match key {
            "cover-ms" => &mut self.cover,
            "settle-ms" => &mut self.settle,
            "reveal-ms" => &mut self.reveal,
            "wipe-ms" => &mut self.wipe,
            "stagger-ms" => &mut self.stagger,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *slot = Duration::from_millis(parse(key, value)?);
        Ok(())
    }

    /// Apply overrides, then fall back to the defaults entirely if the
    /// result would uncover the page before navigating.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        for (k, v) in overrides {
            if let Err(e) = self.apply_override(k, v) {
                errors.push(e);
            }
        }
        if let Err(e) = self.validate() {
            errors.push(e);
            self = Self::default();
        }
        (self, errors)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn ranged(key: &'static str, v: f32, min: f32, max: f32) -> Result<f32, ConfigError> {
    if v.is_finite() && (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            min,
            max,
            got: v,
        })
    }
}
