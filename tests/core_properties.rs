//! Scoring and orbit placement through the public API.

mod common;

use approx::assert_relative_eq;
use cosmic_watch::neo::NearEarthObjectRecord;
use cosmic_watch::orbit::planets::PLANETS;
use cosmic_watch::orbit::{
    phase_for_identity, position, OrbitKind, OrbitingBodyDescriptor, ASTEROID_BASE_DISTANCE,
};
use cosmic_watch::risk::{RiskLevel, score};
use std::f64::consts::TAU;

use common::planar_radius;

#[test]
fn test_documented_scores() {
    let close_hazard = NearEarthObjectRecord::new(true, 32_000.0, 340.0, 50_000.0);
    assert_eq!(score(&close_hazard).value(), 90);
    assert_eq!(score(&close_hazard).level(), RiskLevel::Elevated);

    let distant = NearEarthObjectRecord::new(false, 8_000_000.0, 50.0, 20_000.0);
    assert_eq!(score(&distant).value(), 5);
    assert_eq!(score(&distant).level(), RiskLevel::Nominal);
}

#[test]
fn test_everything_maxed_is_capped() {
    let record = NearEarthObjectRecord::new(true, 10.0, 5_000.0, 200_000.0);
    assert_eq!(score(&record).value(), 100);
}

#[test]
fn test_fifty_is_not_elevated() {
    let record = NearEarthObjectRecord::new(true, 20_000_000.0, 0.0, 0.0);
    assert_eq!(score(&record).value(), 50);
    assert_eq!(score(&record).level(), RiskLevel::Nominal);
}

#[test]
fn test_planets_stay_on_their_rings() {
    for planet in PLANETS {
        let body = planet.orbit();
        for t in [0.0, 0.5, 60.0, 3_600.0, 86_400.0] {
            let p = position(&body, t);
            assert_eq!(p.y, 0.0);
            assert_relative_eq!(planar_radius(p), planet.distance, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_asteroid_radius_from_miss_distance() {
    let body = OrbitingBodyDescriptor::asteroid("3542519", 8_000_000.0, 20_000.0);
    assert_eq!(body.kind.radius(), ASTEROID_BASE_DISTANCE + 8.0);
    assert_relative_eq!(planar_radius(position(&body, 42.0)), 78.0, max_relative = 1e-12);
}

#[test]
fn test_start_phase_is_stable_per_identity() {
    let a = phase_for_identity("2465633");
    assert_eq!(a, phase_for_identity("2465633"));
    assert!((0.0..TAU).contains(&a));
    assert_ne!(a, phase_for_identity("2465634"));
}

#[test]
fn test_position_at_zero_uses_phase() {
    let body = OrbitingBodyDescriptor::new(
        OrbitKind::Planet {
            distance: 10.0,
            angular_speed: 1.0,
        },
        TAU / 4.0,
    );
    let p = position(&body, 0.0);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 10.0, epsilon = 1e-12);
}

#[test]
fn test_zero_velocity_asteroid_is_stationary() {
    let body = OrbitingBodyDescriptor::asteroid("54016476", 0.0, 0.0);
    assert_eq!(position(&body, 0.0), position(&body, 10_000.0));
    assert_relative_eq!(planar_radius(position(&body, 0.0)), ASTEROID_BASE_DISTANCE);
}
