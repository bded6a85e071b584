//! Orbit ring rendering using Bevy Gizmos.
//!
//! Planets get a faint circle at their orbit radius. Asteroid orbits are not
//! drawn; with dozens of them the rings would drown the scene.

use bevy::prelude::*;

use crate::orbit::planets::PLANETS;

/// Plugin providing orbit ring visualization.
pub struct OrbitRingPlugin;

impl Plugin for OrbitRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRingSettings>()
            .add_systems(Update, draw_orbit_rings);
    }
}

/// Settings for orbit ring rendering.
#[derive(Resource)]
pub struct OrbitRingSettings {
    pub visible: bool,
    /// Line segments per ring.
    pub segments: u32,
    pub alpha: f32,
}

impl Default for OrbitRingSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.15,
        }
    }
}

/// Points of a circle of `radius` in the y = 0 plane, closed (first == last).
pub fn ring_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(8);
    (0..=segments)
        .map(|i| {
            let a = (i % segments) as f32 / segments as f32 * std::f32::consts::TAU;
            Vec3::new(radius * a.cos(), 0.0, radius * a.sin())
        })
        .collect()
}

fn draw_orbit_rings(mut gizmos: Gizmos, settings: Res<OrbitRingSettings>) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(1.0, 1.0, 1.0, settings.alpha);
    for planet in &PLANETS {
        let points = ring_points(planet.distance as f32, settings.segments);
        for pair in points.windows(2) {
            gizmos.line(pair[0], pair[1], color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_and_planar() {
        let points = ring_points(60.0, 32);
        assert_eq!(points.len(), 33);
        assert_eq!(points.first(), points.last());
        for p in &points {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 60.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_minimum_segments() {
        assert_eq!(ring_points(1.0, 0).len(), 9);
    }
}
