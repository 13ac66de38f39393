//! Recommendation responses and their classification.

mod classifier;
mod model;

pub use classifier::is_recommendation;
pub use model::{OutgoingRequest, RecommendationItem, ServerResponse};
