use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The caller's coordinates. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Where the one-shot position acquisition currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoStatus {
    Unknown,
    Pending,
    Resolved,
    Denied,
}

impl GeoStatus {
    /// Short status line for the location indicator.
    pub fn label(self) -> &'static str {
        match self {
            GeoStatus::Unknown => "위치 확인 대기",
            GeoStatus::Pending => "위치 확인 중…",
            GeoStatus::Resolved => "위치 확인됨",
            GeoStatus::Denied => "위치 권한 필요",
        }
    }
}

/// Options passed to the underlying location provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    /// Upper bound for one query; the resolver enforces it as well.
    pub timeout: Duration,
    /// How old a previously cached fix may be and still be accepted.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// Failure reported by a location provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location query timed out")]
    Timeout,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Failure of [`super::GeoResolver::get_position`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The platform has no location capability at all.
    #[error("location capability is not available")]
    CapabilityUnavailable,
    /// The query was denied, timed out or failed.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}
