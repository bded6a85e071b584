//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;
use chrono::NaiveDate;
use clap::Parser;

use crate::feed::DEFAULT_BASE_URL;
use crate::types::{MAX_TIME_SCALE, MIN_TIME_SCALE};

/// NASA's shared, heavily rate-limited key.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Default limit on one whole feed request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error(
        "time scale must be between {min} and {max}, got {0}",
        min = MIN_TIME_SCALE,
        max = MAX_TIME_SCALE
    )]
    InvalidTimeScale(f64),

    #[error("refresh period of {0} minutes is too long")]
    RefreshTooLong(u64),

    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cosmic-watch", about = "Near-Earth object watch over a stylized solar system")]
pub struct Cli {
    /// NeoWs API key.
    #[arg(long, env = "NASA_API_KEY", default_value = DEMO_API_KEY)]
    pub api_key: String,

    /// Feed date (YYYY-MM-DD). Defaults to today (UTC) at each fetch.
    #[arg(long)]
    pub date: Option<String>,

    /// NeoWs REST root.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Minutes between feed refreshes; 0 disables polling.
    #[arg(long, default_value_t = 30)]
    pub refresh_minutes: u64,

    /// Seconds before a feed request is abandoned.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Read a saved feed document instead of calling the API.
    #[arg(long)]
    pub offline: Option<PathBuf>,

    /// Orbit clock speed multiplier, 0.125 to 64.
    #[arg(long, default_value_t = 1.0)]
    pub time_scale: f64,

    /// Print the ranked feed to stdout and exit instead of opening a window.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Cli {
    /// Validate into the runtime configuration.
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        if self.offline.is_none() && self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let date = self
            .date
            .as_deref()
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidDate(s.to_string()))
            })
            .transpose()?;

        if !(MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::InvalidTimeScale(self.time_scale));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let refresh = match self.refresh_minutes {
            0 => None,
            minutes => {
                let secs = minutes
                    .checked_mul(60)
                    .ok_or(ConfigError::RefreshTooLong(minutes))?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(AppConfig {
            feed: FeedConfig {
                api_key: self.api_key.trim().to_string(),
                base_url: self.base_url.trim_end_matches('/').to_string(),
                date,
                offline: self.offline,
                timeout: Duration::from_secs(self.timeout_secs),
            },
            refresh,
            time_scale: self.time_scale,
            list_only: self.list,
        })
    }
}

/// Where and how to fetch telemetry.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FeedConfig {
    pub api_key: String,
    pub base_url: String,
    /// Fixed feed date, or `None` for today at fetch time.
    pub date: Option<NaiveDate>,
    /// Saved feed document to read instead of the network.
    pub offline: Option<PathBuf>,
    /// Limit on one whole request, connect included.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            date: None,
            offline: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl FeedConfig {
    /// Read from a file only.
    pub fn offline(path: impl Into<PathBuf>) -> Self {
        Self {
            offline: Some(path.into()),
            ..Default::default()
        }
    }

    /// The date to request: the fixed one, or today in UTC.
    pub fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// Fully validated application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub feed: FeedConfig,
    /// Polling period, if enabled.
    pub refresh: Option<Duration>,
    pub time_scale: f64,
    pub list_only: bool,
}
