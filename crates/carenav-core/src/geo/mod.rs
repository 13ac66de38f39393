//! Caller position acquisition.

mod model;
mod provider;
mod resolver;

pub use model::{GeoError, GeoPosition, GeoStatus, LocationError, PositionOptions};
pub use provider::LocationProvider;
pub use resolver::{DEFAULT_BEST_EFFORT_WAIT, GeoResolver};
