//! Circular orbit positions for scene bodies.
//!
//! Every body moves on a circle in the y = 0 plane around the origin:
//!
//! ```text
//! angle = phase + t * speed * ORBIT_SPEED_MULTIPLIER
//! x = r cos(angle),  y = 0,  z = r sin(angle)
//! ```
//!
//! Planets take `r` and `speed` from the catalogue. Asteroids derive them from
//! feed data: `r = 70 + miss_km / 1e6` and `speed = velocity_kph / 20 000`,
//! which puts them just outside the Mars orbit and spreads them by approach
//! distance. None of this is physically accurate.
//!
//! `phase` is fixed per body identity (see [`phase_for_identity`]) so a body
//! that is respawned after a feed refresh keeps its place on the circle.

pub mod planets;

#[cfg(test)]
mod proptest_orbit;

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

/// Global tuning constant: angular advance per unit speed per elapsed second.
pub const ORBIT_SPEED_MULTIPLIER: f64 = 0.02;

/// Asteroid speed coefficient is `velocity_kph / ASTEROID_SPEED_DIVISOR`.
pub const ASTEROID_SPEED_DIVISOR: f64 = 20_000.0;

/// Innermost asteroid orbit radius, in scene units.
pub const ASTEROID_BASE_DISTANCE: f64 = 70.0;

/// Asteroid orbit radius grows by one scene unit per this many km of miss distance.
pub const ASTEROID_DISTANCE_DIVISOR: f64 = 1_000_000.0;

/// A point on a body's orbit. `y` is always 0.
pub type OrbitPosition = DVec3;

/// How a body's radius and speed are determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitKind {
    Planet {
        /// Orbit radius in scene units.
        distance: f64,
        angular_speed: f64,
    },
    Asteroid {
        miss_distance_km: f64,
        velocity_kph: f64,
    },
}

impl OrbitKind {
    /// Orbit radius in scene units.
    pub fn radius(&self) -> f64 {
        match *self {
            OrbitKind::Planet { distance, .. } => distance,
            OrbitKind::Asteroid {
                miss_distance_km, ..
            } => ASTEROID_BASE_DISTANCE + miss_distance_km / ASTEROID_DISTANCE_DIVISOR,
        }
    }

    /// Angular speed coefficient, before [`ORBIT_SPEED_MULTIPLIER`].
    pub fn speed(&self) -> f64 {
        match *self {
            OrbitKind::Planet { angular_speed, .. } => angular_speed,
            OrbitKind::Asteroid { velocity_kph, .. } => velocity_kph / ASTEROID_SPEED_DIVISOR,
        }
    }
}

/// Everything needed to place a body on its orbit.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitingBodyDescriptor {
    pub kind: OrbitKind,
    /// Angle at `t = 0`, in radians.
    pub start_angle_phase: f64,
}

impl OrbitingBodyDescriptor {
    pub fn new(kind: OrbitKind, start_angle_phase: f64) -> Self {
        Self {
            kind,
            start_angle_phase,
        }
    }

    /// A planet whose phase is seeded from `identity`.
    pub fn planet(identity: &str, distance: f64, angular_speed: f64) -> Self {
        Self::new(
            OrbitKind::Planet {
                distance,
                angular_speed,
            },
            phase_for_identity(identity),
        )
    }

    /// An asteroid whose phase is seeded from `identity`.
    pub fn asteroid(identity: &str, miss_distance_km: f64, velocity_kph: f64) -> Self {
        Self::new(
            OrbitKind::Asteroid {
                miss_distance_km,
                velocity_kph,
            },
            phase_for_identity(identity),
        )
    }

    /// Angle at elapsed time `t`, unwrapped.
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle_phase + t * self.kind.speed() * ORBIT_SPEED_MULTIPLIER
    }
}

/// Position of `body` after `elapsed_time` scene seconds.
///
/// Pure: identical inputs give bit-identical output. Non-finite input is a
/// caller error and yields a non-finite position.
pub fn position(body: &OrbitingBodyDescriptor, elapsed_time: f64) -> OrbitPosition {
    let radius = body.kind.radius();
    let angle = body.angle_at(elapsed_time);
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Map a body identity to a start angle in `[0, 2π)`.
///
/// 64-bit FNV-1a over the identity bytes; the top 53 bits become the fraction
/// of a full turn. Stable across runs and platforms.
pub fn phase_for_identity(identity: &str) -> f64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = identity.bytes().fold(FNV_OFFSET, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    });
    let fraction = (hash >> 11) as f64 / (1u64 << 53) as f64;
    fraction * TAU
}
