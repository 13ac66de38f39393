use crate::recommendation::RecommendationItem;

/// The most recent recommendation list shown in this session.
///
/// Positions are 1-based from the user's point of view ("2번 상세").
/// The list is replaced wholesale, never merged. Callers only replace it
/// after [`crate::recommendation::is_recommendation`] accepted a response;
/// the cache itself does not check.
#[derive(Debug, Clone, Default)]
pub struct SessionListCache {
    items: Vec<RecommendationItem>,
}

impl SessionListCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored list.
    pub fn replace(&mut self, items: Vec<RecommendationItem>) {
        self.items = items;
    }

    /// Item at `one_based_index`, or `None` when the index is 0 or out of range.
    pub fn resolve(&self, one_based_index: usize) -> Option<&RecommendationItem> {
        one_based_index
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }
}
