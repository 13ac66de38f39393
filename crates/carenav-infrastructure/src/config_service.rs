//! Loads [`ClientConfig`] from disk and the environment.
//!
//! Priority: environment variables > config.toml > defaults.

use std::fs;
use std::path::{Path, PathBuf};

use carenav_core::config::ClientConfig;
use carenav_core::error::{CarenavError, Result};
use tracing::{debug, warn};

use crate::paths::CarenavPaths;

pub const ENV_BASE_URL: &str = "CARENAV_BASE_URL";
pub const ENV_LATITUDE: &str = "CARENAV_LAT";
pub const ENV_LONGITUDE: &str = "CARENAV_LON";

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default `~/.config/carenav/config.toml`.
    pub fn new() -> Result<Self> {
        let path = CarenavPaths::config_file().map_err(|e| CarenavError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file, falling back to defaults when it is missing or empty.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }

    /// File configuration with process environment overrides applied.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = self.load_file()?;
        Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
    }
}

/// Applies `CARENAV_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }

    for (key, slot) in [
        (ENV_LATITUDE, &mut config.geo.latitude),
        (ENV_LONGITUDE, &mut config.geo.longitude),
    ] {
        if let Some(raw) = lookup(key) {
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => *slot = Some(value),
                _ => warn!(key, value = %raw, "ignoring unparseable coordinate"),
            }
        }
    }

    config
}
