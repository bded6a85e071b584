//! Risk scoring for near-Earth objects.
//!
//! An additive point system over four factors, capped at 100:
//!
//! | factor            | condition              | points |
//! |-------------------|------------------------|--------|
//! | hazardous flag    | set                    | 50     |
//! | miss distance     | < 1 000 000 km         | 30     |
//! |                   | < 5 000 000 km         | 15     |
//! |                   | < 10 000 000 km        | 5      |
//! | max diameter      | > 1000 m               | 20     |
//! |                   | > 100 m                | 10     |
//! | relative velocity | > 80 000 km/h          | 10     |
//!
//! Every term is non-negative, so the score never drops below 0. The raw sum
//! can reach 110, which is why the cap exists.

#[cfg(test)]
mod proptest_risk;

use std::fmt;

use crate::neo::NearEarthObjectRecord;

/// Upper bound of the score range.
pub const MAX_SCORE: u8 = 100;

/// Points for the upstream hazardous classification.
pub const HAZARD_POINTS: f64 = 50.0;

/// Proximity tiers, nearest first: (exclusive upper bound in km, points).
pub const PROXIMITY_TIERS: [(f64, f64); 3] = [
    (1_000_000.0, 30.0),
    (5_000_000.0, 15.0),
    (10_000_000.0, 5.0),
];

/// Size tiers, largest first: (exclusive lower bound in metres, points).
pub const SIZE_TIERS: [(f64, f64); 2] = [(1000.0, 20.0), (100.0, 10.0)];

/// Velocity above which an object is considered fast, in km/h.
pub const FAST_VELOCITY_KPH: f64 = 80_000.0;

/// Points for exceeding [`FAST_VELOCITY_KPH`].
pub const VELOCITY_POINTS: f64 = 10.0;

/// Scores strictly above this are shown as elevated.
pub const ELEVATED_THRESHOLD: u8 = 50;

/// A risk score in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Build a score, capping at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn level(self) -> RiskLevel {
        if self.0 > ELEVATED_THRESHOLD {
            RiskLevel::Elevated
        } else {
            RiskLevel::Nominal
        }
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Coarse classification used for badge colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Nominal,
    Elevated,
}

/// Points contributed by each factor, before capping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RiskBreakdown {
    pub hazard: f64,
    pub proximity: f64,
    pub size: f64,
    pub velocity: f64,
}

impl RiskBreakdown {
    /// Evaluate every factor for `record`.
    pub fn of(record: &NearEarthObjectRecord) -> Self {
        Self {
            hazard: if record.is_hazardous { HAZARD_POINTS } else { 0.0 },
            proximity: proximity_points(record.miss_distance_km),
            size: size_points(record.diameter_max_meters),
            velocity: velocity_points(record.relative_velocity_kph),
        }
    }

    /// Uncapped sum of all factors.
    pub fn total(&self) -> f64 {
        self.hazard + self.proximity + self.size + self.velocity
    }

    /// Final score: rounded and capped.
    pub fn score(&self) -> RiskScore {
        let capped = self.total().round().clamp(0.0, MAX_SCORE as f64);
        RiskScore::new(capped as u8)
    }
}

/// Score one record. Total and deterministic.
pub fn score(record: &NearEarthObjectRecord) -> RiskScore {
    RiskBreakdown::of(record).score()
}

/// NaN fails every comparison, so it falls through to 0 points.
fn proximity_points(miss_distance_km: f64) -> f64 {
    PROXIMITY_TIERS
        .iter()
        .find(|(bound, _)| miss_distance_km < *bound)
        .map_or(0.0, |(_, points)| *points)
}

fn size_points(diameter_max_meters: f64) -> f64 {
    SIZE_TIERS
        .iter()
        .find(|(bound, _)| diameter_max_meters > *bound)
        .map_or(0.0, |(_, points)| *points)
}

fn velocity_points(relative_velocity_kph: f64) -> f64 {
    if relative_velocity_kph > FAST_VELOCITY_KPH {
        VELOCITY_POINTS
    } else {
        0.0
    }
}
