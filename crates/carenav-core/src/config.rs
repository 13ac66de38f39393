//! Client configuration model.
//!
//! Loading and environment overrides live in `carenav-infrastructure`;
//! this module only defines the shape and the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPosition, PositionOptions};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CHAT_PATH: &str = "/ai2/chat";
pub const DEFAULT_REPORT_PATH: &str = "/ai2/b2b/report/generate";
pub const DEFAULT_REFINE_PATH: &str = "/ai2/b2b/report/refine";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub chat_path: String,
    pub report_path: String,
    pub refine_path: String,
    pub request_timeout_secs: u64,
    pub geo: GeoConfig,
    pub signals: SignalConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            report_path: DEFAULT_REPORT_PATH.to_string(),
            refine_path: DEFAULT_REFINE_PATH.to_string(),
            request_timeout_secs: 30,
            geo: GeoConfig::default(),
            signals: SignalConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Joins `base_url` and an endpoint path without doubling slashes.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Location settings.
///
/// A terminal has no geolocation capability of its own; a fixed position
/// here stands in for it. Without one, location-bound requests are refused.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeoConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub high_accuracy: bool,
    pub timeout_secs: u64,
    pub maximum_age_secs: u64,
    pub best_effort_wait_ms: u64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            high_accuracy: true,
            timeout_secs: 10,
            maximum_age_secs: 60,
            best_effort_wait_ms: 1500,
        }
    }
}

impl GeoConfig {
    /// The configured fixed position, when both coordinates are set.
    pub fn fixed_position(&self) -> Option<GeoPosition> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPosition::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_secs(self.timeout_secs),
            maximum_age: Duration::from_secs(self.maximum_age_secs),
        }
    }

    pub fn best_effort_wait(&self) -> Duration {
        Duration::from_millis(self.best_effort_wait_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SignalConfig {
    /// Extra regexes (matched on whitespace-free text) that need a position.
    pub extra_location_patterns: Vec<String>,
}
