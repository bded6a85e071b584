//! Telemetry fetch service for the NASA NeoWs `/feed` endpoint.
//!
//! A fetch produces the complete, scored and ranked list in one step. Callers
//! only ever see a finished list, never a partially sorted one.

pub mod plugin;

use std::path::PathBuf;
use std::time::Duration;

use bevy::log::{debug, info, warn};
use chrono::NaiveDate;

use crate::config::FeedConfig;
use crate::neo::{FeedResponse, NearEarthObjectRecord, RawNeo};
use crate::orbit::OrbitingBodyDescriptor;
use crate::risk::{self, RiskScore};
use crate::types::BodyKey;

pub use plugin::{FeedPlugin, LiveFeed, RefreshFeed};

/// Public NeoWs REST root.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Limit on establishing the TCP/TLS connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("feed JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to start feed worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to read offline feed {path}: {source}")]
    Offline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One scored object, ready for display and orbit placement.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedObject {
    pub id: String,
    pub name: String,
    pub record: NearEarthObjectRecord,
    pub diameter_min_meters: f64,
    pub risk: RiskScore,
}

impl TrackedObject {
    pub fn from_raw(raw: RawNeo) -> Self {
        let record = raw.record();
        Self {
            diameter_min_meters: raw.diameter_min_meters(),
            risk: risk::score(&record),
            id: raw.id,
            name: raw.name,
            record,
        }
    }

    pub fn key(&self) -> BodyKey {
        BodyKey::Asteroid(self.id.clone())
    }

    /// Orbit for this object, phase-seeded from its id.
    pub fn orbit(&self) -> OrbitingBodyDescriptor {
        OrbitingBodyDescriptor::asteroid(
            &self.id,
            self.record.miss_distance_km,
            self.record.relative_velocity_kph,
        )
    }

    /// Name for display, falling back to the id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}

/// Score every object and sort descending by score.
///
/// The sort is stable, so equal scores keep fetch order.
pub fn rank(raw: Vec<RawNeo>) -> Vec<TrackedObject> {
    let mut objects: Vec<TrackedObject> = raw.into_iter().map(TrackedObject::from_raw).collect();
    objects.sort_by(|a, b| b.risk.cmp(&a.risk));
    objects
}

/// Parse a full `/feed` document into a ranked list.
pub fn parse_feed(body: &str) -> Result<Vec<TrackedObject>, FeedError> {
    let response: FeedResponse = serde_json::from_str(body)?;
    Ok(rank(response.flatten()))
}

/// Request URL for a single-day feed.
pub fn feed_url(base_url: &str, api_key: &str, date: NaiveDate) -> String {
    let day = date.format("%Y-%m-%d");
    format!(
        "{}/feed?start_date={day}&end_date={day}&api_key={api_key}",
        base_url.trim_end_matches('/')
    )
}

/// HTTP client for the feed.
#[derive(Clone, Debug)]
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Build a client whose requests give up after `config.timeout`.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch, score and rank the current day's objects.
    pub async fn fetch_current_objects(&self) -> Result<Vec<TrackedObject>, FeedError> {
        if let Some(path) = &self.config.offline {
            debug!("Reading offline feed from {}", path.display());
            let body = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FeedError::Offline {
                    path: path.clone(),
                    source,
                })?;
            return parse_feed(&body);
        }

        let date = self.config.effective_date();
        info!("Requesting NeoWs feed for {}", date);

        let url = feed_url(&self.config.base_url, &self.config.api_key, date);
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status()));
        }

        let body = resp.text().await?;
        parse_feed(&body)
    }

    /// Like [`fetch_current_objects`](Self::fetch_current_objects), but a
    /// failure is logged and replaced with `fallback`.
    pub async fn fetch_or_fallback(&self, fallback: Vec<TrackedObject>) -> Vec<TrackedObject> {
        match self.fetch_current_objects().await {
            Ok(objects) => objects,
            Err(e) => {
                warn!("Feed unavailable, using {} fallback objects: {}", fallback.len(), e);
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use serde_json::json;

    fn raw(id: &str, hazardous: bool, miss_km: &str) -> RawNeo {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("({id})"),
            "is_potentially_hazardous_asteroid": hazardous,
            "close_approach_data": [{
                "miss_distance": { "kilometers": miss_km },
                "relative_velocity": { "kilometers_per_hour": "1000" }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![
            raw("far", false, "20000000"),
            raw("hazard", true, "20000000"),
            raw("near", false, "500000"),
        ]);
        let ids: Vec<_> = ranked.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["hazard", "near", "far"]);
        assert_eq!(ranked[0].risk.value(), 50);
    }

    #[test]
    fn test_rank_ties_keep_fetch_order() {
        let ranked = rank(vec![
            raw("a", false, "7000000"),
            raw("b", false, "8000000"),
            raw("top", true, "7000000"),
            raw("c", false, "9000000"),
        ]);
        let ids: Vec<_> = ranked.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "a", "b", "c"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_parse_feed_skips_non_objects_and_ranks() {
        let body = fixtures::feed_document(
            "2026-10-19",
            vec![
                fixtures::neo_json("slow", false, 8_000_000.0, 50.0, 20_000.0),
                json!(42),
                fixtures::neo_json("close", true, 32_000.0, 340.0, 50_000.0),
            ],
        );
        let objects = parse_feed(&body).unwrap();
        let ranked: Vec<_> = objects
            .iter()
            .map(|o| (o.id.as_str(), o.risk.value()))
            .collect();
        assert_eq!(ranked, vec![("close", 90), ("slow", 5)]);
    }

    #[test]
    fn test_parse_feed_without_objects_key() {
        assert!(parse_feed("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_feed_rejects_non_json() {
        assert!(matches!(parse_feed("<html>"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_feed_url() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            feed_url("https://api.nasa.gov/neo/rest/v1/", "KEY", date),
            "https://api.nasa.gov/neo/rest/v1/feed?start_date=2026-10-19&end_date=2026-10-19&api_key=KEY"
        );
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let mut object = TrackedObject::from_raw(raw("123", false, "1"));
        assert_eq!(object.label(), "(123)");
        object.name.clear();
        assert_eq!(object.label(), "123");
    }

    #[test]
    fn test_orbit_seeded_by_id() {
        let object = TrackedObject::from_raw(raw("123", false, "3000000"));
        assert_eq!(object.orbit(), object.orbit());
        assert_eq!(
            object.orbit().start_angle_phase,
            crate::orbit::phase_for_identity("123")
        );
    }
}
