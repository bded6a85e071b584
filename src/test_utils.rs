//! Test utilities for scoring and orbit tests.
//!
//! Provides fixtures for feed records and assertions for orbit geometry.

use bevy::math::DVec3;

/// Fixtures for feed data.
pub mod fixtures {
    use std::path::PathBuf;

    use serde_json::{Value, json};

    use crate::neo::{NearEarthObjectRecord, RawNeo};

    /// Saved two-day feed document, shared with the integration tests.
    pub fn feed_path() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/feed.json"))
    }

    /// A record with the given factors.
    pub fn record(
        hazardous: bool,
        miss_km: f64,
        diameter_m: f64,
        velocity_kph: f64,
    ) -> NearEarthObjectRecord {
        NearEarthObjectRecord::new(hazardous, miss_km, diameter_m, velocity_kph)
    }

    /// One NeoWs object in upstream JSON shape (numbers as strings where upstream does so).
    pub fn neo_json(
        id: &str,
        hazardous: bool,
        miss_km: f64,
        diameter_m: f64,
        velocity_kph: f64,
    ) -> Value {
        json!({
            "id": id,
            "name": format!("({id})"),
            "is_potentially_hazardous_asteroid": hazardous,
            "estimated_diameter": { "meters": {
                "estimated_diameter_min": diameter_m / 2.0,
                "estimated_diameter_max": diameter_m
            }},
            "close_approach_data": [{
                "miss_distance": { "kilometers": miss_km.to_string() },
                "relative_velocity": { "kilometers_per_hour": velocity_kph.to_string() }
            }]
        })
    }

    /// Parse [`neo_json`] into a raw object.
    pub fn raw_neo(
        id: &str,
        hazardous: bool,
        miss_km: f64,
        diameter_m: f64,
        velocity_kph: f64,
    ) -> RawNeo {
        serde_json::from_value(neo_json(id, hazardous, miss_km, diameter_m, velocity_kph))
            .expect("fixture is valid")
    }

    /// A `/feed` document with `objects` listed under one date.
    pub fn feed_document(date: &str, objects: Vec<Value>) -> String {
        json!({ "near_earth_objects": { date: objects } }).to_string()
    }
}

/// Assertions for orbit geometry.
pub mod assertions {
    use super::*;

    /// Assert `p` lies on the circle of `radius` in the y = 0 plane.
    ///
    /// # Panics
    /// Panics if `y != 0` or the radial error exceeds `tolerance` (relative).
    pub fn assert_on_circle(p: DVec3, radius: f64, tolerance: f64) {
        assert_eq!(p.y, 0.0, "position left the orbital plane: {p:?}");
        let r = (p.x * p.x + p.z * p.z).sqrt();
        let error = ((r - radius) / radius).abs();
        assert!(
            error <= tolerance,
            "position off circle: r={r:.9}, expected={radius:.9}, error={error:.3e}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{OrbitingBodyDescriptor, position};
    use crate::risk::score;

    #[test]
    fn test_fixture_round_trips_into_record() {
        let neo = fixtures::raw_neo("1", true, 32_000.0, 340.0, 50_000.0);
        assert_eq!(neo.record(), fixtures::record(true, 32_000.0, 340.0, 50_000.0));
        assert_eq!(neo.diameter_min_meters(), 170.0);
        assert_eq!(score(&neo.record()).value(), 90);
    }

    #[test]
    fn test_planet_fixture_on_circle() {
        let body = OrbitingBodyDescriptor::planet("Earth", 60.0, 2.9);
        for t in [0.0, 1.0, 100.0, 12_345.6] {
            assertions::assert_on_circle(position(&body, t), 60.0, 1e-12);
        }
    }
}
