//! Near-Earth object records as delivered by the NeoWs feed.
//!
//! Upstream JSON is loosely typed: distances and velocities arrive as numeric
//! strings, and any field may be missing or null. Everything here is lenient.
//! A field that cannot be read becomes its zero-equivalent rather than an error,
//! so a single odd record never takes down a whole fetch.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The four quantities the risk scorer looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NearEarthObjectRecord {
    pub is_hazardous: bool,
    /// Closest approach distance in kilometres.
    pub miss_distance_km: f64,
    /// Upper estimate of the diameter in metres.
    pub diameter_max_meters: f64,
    /// Relative velocity at closest approach in km/h.
    pub relative_velocity_kph: f64,
}

impl NearEarthObjectRecord {
    /// Build a record, coercing any negative or non-finite quantity to 0.
    pub fn new(
        is_hazardous: bool,
        miss_distance_km: f64,
        diameter_max_meters: f64,
        relative_velocity_kph: f64,
    ) -> Self {
        Self {
            is_hazardous,
            miss_distance_km: sanitize(miss_distance_km),
            diameter_max_meters: sanitize(diameter_max_meters),
            relative_velocity_kph: sanitize(relative_velocity_kph),
        }
    }
}

/// Top-level `/feed` response.
#[derive(Debug, Default, Deserialize)]
pub struct FeedResponse {
    /// Date (`YYYY-MM-DD`) to that day's objects. `BTreeMap` keeps dates ascending.
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Value>,
}

impl FeedResponse {
    /// Flatten the date-keyed arrays into one list, earliest date first.
    ///
    /// Entries that are not JSON objects are skipped.
    pub fn flatten(self) -> Vec<RawNeo> {
        let mut out = Vec::new();
        for (_, day) in self.near_earth_objects {
            let Value::Array(items) = day else {
                continue;
            };
            out.extend(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value::<RawNeo>(item).ok()),
            );
        }
        out
    }
}

/// One raw object from the feed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawNeo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub estimated_diameter: Value,
    #[serde(default)]
    pub close_approach_data: Value,
}

impl RawNeo {
    /// Scoring inputs, read from the first close approach entry.
    pub fn record(&self) -> NearEarthObjectRecord {
        NearEarthObjectRecord::new(
            self.is_potentially_hazardous_asteroid,
            number_at(&self.close_approach_data, "/0/miss_distance/kilometers"),
            number_at(&self.estimated_diameter, "/meters/estimated_diameter_max"),
            number_at(
                &self.close_approach_data,
                "/0/relative_velocity/kilometers_per_hour",
            ),
        )
    }

    /// Lower diameter estimate in metres, for display.
    pub fn diameter_min_meters(&self) -> f64 {
        number_at(&self.estimated_diameter, "/meters/estimated_diameter_min")
    }
}

/// Read a number (or numeric string) at a JSON pointer, 0 when absent.
fn number_at(value: &Value, pointer: &str) -> f64 {
    sanitize(value.pointer(pointer).map(coerce_f64).unwrap_or(0.0))
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn sanitize(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
