//! Stylized planet catalogue.
//!
//! Distances and speeds are scene units chosen for layout, not physical values.

use super::OrbitingBodyDescriptor;
use crate::types::BodyKey;

/// Radius of the Sun sphere at the origin.
pub const SUN_RADIUS: f32 = 4.0;

/// Static description of one planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetData {
    pub name: &'static str,
    /// Orbit radius in scene units.
    pub distance: f64,
    /// Sphere radius in scene units.
    pub size: f32,
    /// Angular speed coefficient fed to the orbit calculator.
    pub angular_speed: f64,
    /// sRGB colour.
    pub color: [f32; 3],
}

impl PlanetData {
    pub fn key(&self) -> BodyKey {
        BodyKey::Planet(self.name)
    }

    pub fn orbit(&self) -> OrbitingBodyDescriptor {
        OrbitingBodyDescriptor::planet(self.name, self.distance, self.angular_speed)
    }
}

/// Inner planets through Saturn, innermost first.
pub const PLANETS: [PlanetData; 6] = [
    PlanetData {
        name: "Mercury",
        distance: 30.0,
        size: 0.8,
        angular_speed: 4.7,
        color: [0.65, 0.65, 0.65],
    },
    PlanetData {
        name: "Venus",
        distance: 45.0,
        size: 1.5,
        angular_speed: 3.5,
        color: [0.90, 0.76, 0.53],
    },
    PlanetData {
        name: "Earth",
        distance: 60.0,
        size: 1.6,
        angular_speed: 2.9,
        color: [0.31, 0.51, 0.74],
    },
    PlanetData {
        name: "Mars",
        distance: 80.0,
        size: 1.0,
        angular_speed: 2.4,
        color: [0.75, 0.31, 0.30],
    },
    PlanetData {
        name: "Jupiter",
        distance: 110.0,
        size: 4.0,
        angular_speed: 1.3,
        color: [0.85, 0.79, 0.62],
    },
    PlanetData {
        name: "Saturn",
        distance: 150.0,
        size: 3.5,
        angular_speed: 0.9,
        color: [0.96, 0.82, 0.25],
    },
];
