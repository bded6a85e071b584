//! Shared types and constants for the dashboard.

use bevy::prelude::*;

/// Slowest selectable orbit clock scale.
pub const MIN_TIME_SCALE: f64 = 0.125;

/// Fastest selectable orbit clock scale.
pub const MAX_TIME_SCALE: f64 = 64.0;

/// Persistent identity of a body in the scene.
///
/// Entities are respawned whenever the feed refreshes, so selection and orbit
/// phase are keyed on this instead of on `Entity`.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyKey {
    /// A catalogue planet, keyed by name.
    Planet(&'static str),
    /// A tracked near-Earth object, keyed by its upstream id.
    Asteroid(String),
}

impl BodyKey {
    /// Identity string fed to the orbit phase hash.
    pub fn identity(&self) -> &str {
        match self {
            BodyKey::Planet(name) => name,
            BodyKey::Asteroid(id) => id,
        }
    }
}

/// Animation clock driving every orbit in the scene.
///
/// `elapsed` is the value handed to the orbit position calculator. It only
/// advances while not paused, scaled by `scale`.
#[derive(Resource, Clone, Debug)]
pub struct OrbitClock {
    /// Scaled seconds since startup.
    pub elapsed: f64,
    /// Scaled seconds per real second.
    pub scale: f64,
    /// Whether the clock is frozen.
    pub paused: bool,
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            scale: 1.0,
            paused: false,
        }
    }
}

impl OrbitClock {
    /// Create a running clock with the given scale.
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale: scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE),
            ..Default::default()
        }
    }

    /// Advance by `real_seconds` of wall time.
    pub fn advance(&mut self, real_seconds: f64) {
        if self.paused {
            return;
        }
        self.elapsed += real_seconds * self.scale;
    }

    /// Double the scale, up to [`MAX_TIME_SCALE`].
    pub fn faster(&mut self) {
        self.scale = (self.scale * 2.0).min(MAX_TIME_SCALE);
    }

    /// Halve the scale, down to [`MIN_TIME_SCALE`].
    pub fn slower(&mut self) {
        self.scale = (self.scale * 0.5).max(MIN_TIME_SCALE);
    }
}

/// The body the camera is following, if any.
#[derive(Resource, Clone, Debug, Default)]
pub struct Focus {
    pub target: Option<BodyKey>,
}
