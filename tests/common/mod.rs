//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use bevy::math::DVec3;
use cosmic_watch::config::FeedConfig;

/// Path of the saved two-day feed document.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/feed.json")
}

/// Contents of the saved feed document.
pub fn fixture_body() -> String {
    std::fs::read_to_string(fixture_path()).expect("fixture readable")
}

/// Feed configuration reading the saved document instead of the network.
pub fn offline_config() -> FeedConfig {
    FeedConfig::offline(fixture_path())
}

/// Ids of the fixture objects in expected rank order.
pub const FIXTURE_RANKING: [&str; 4] = ["2465633", "54016476", "3727181", "3542519"];

/// Distance from the Sun in the orbital plane.
pub fn planar_radius(p: DVec3) -> f64 {
    (p.x * p.x + p.z * p.z).sqrt()
}
