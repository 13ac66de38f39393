//! Decides whether a chat response is a fresh recommendation list.
//!
//! Detail and lookup answers also carry `centers` (usually a single
//! element), so the presence of centers alone is not enough. A response
//! counts as a recommendation only when it looks ranked: the text starts
//! with `1)` or a candidate carries a distance. Anything ambiguous is
//! classified as "not a recommendation" so the list cache is left alone.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::ServerResponse;

static RANKED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1\)\s").expect("ranked prefix pattern must compile"));

/// True iff the response should replace the session list cache.
pub fn is_recommendation(response: &ServerResponse) -> bool {
    let Some(centers) = response.center_values() else {
        return false;
    };
    if centers.is_empty() {
        return false;
    }

    let starts_ranked = response
        .text()
        .map(|text| RANKED_PREFIX.is_match(text.trim()))
        .unwrap_or(false);
    let has_distance = centers.iter().any(|center| {
        center
            .as_object()
            .is_some_and(|object| object.contains_key("distance_km"))
    });

    starts_ranked || has_distance
}
