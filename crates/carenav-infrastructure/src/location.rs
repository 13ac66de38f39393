//! Location providers for environments without a geolocation API.

use async_trait::async_trait;
use carenav_core::config::GeoConfig;
use carenav_core::geo::{GeoPosition, LocationError, LocationProvider, PositionOptions};
use std::sync::Arc;

/// Answers every query with a configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    position: GeoPosition,
}

impl FixedLocationProvider {
    pub fn new(position: GeoPosition) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<GeoPosition, LocationError> {
        Ok(self.position)
    }
}

/// A platform without any location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationProvider;

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<GeoPosition, LocationError> {
        Err(LocationError::Unavailable(
            "no location capability on this platform".into(),
        ))
    }
}

/// Picks the provider matching the configuration.
pub fn provider_from_config(config: &GeoConfig) -> Arc<dyn LocationProvider> {
    match config.fixed_position() {
        Some(position) => Arc::new(FixedLocationProvider::new(position)),
        None => Arc::new(UnavailableLocationProvider),
    }
}
