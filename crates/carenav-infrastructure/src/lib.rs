pub mod config_service;
pub mod location;
pub mod paths;

pub use config_service::ConfigService;
pub use location::{FixedLocationProvider, UnavailableLocationProvider, provider_from_config};
pub use paths::CarenavPaths;
