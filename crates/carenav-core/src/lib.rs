pub mod config;
pub mod endpoint;
pub mod error;
pub mod geo;
pub mod recommendation;
pub mod report;
pub mod session;
pub mod signal;
pub mod turn;
pub mod view;

// Re-export common error type
pub use error::CarenavError;
