use async_trait::async_trait;

use super::model::{GeoPosition, LocationError, PositionOptions};

/// The platform's one-shot location capability.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether the platform can answer location queries at all.
    fn is_available(&self) -> bool;

    /// Issues one location query.
    async fn current_position(&self, options: PositionOptions)
    -> Result<GeoPosition, LocationError>;
}
