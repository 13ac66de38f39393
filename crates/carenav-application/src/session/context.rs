use carenav_core::geo::GeoResolver;
use carenav_core::recommendation::RecommendationItem;
use carenav_core::session::SessionListCache;
use carenav_core::signal::SignalTable;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Everything one chat session owns.
///
/// The position cache and the recommendation list live here instead of in
/// globals, so independent sessions never see each other's state.
pub struct ChatSession {
    id: String,
    signals: SignalTable,
    geo: GeoResolver,
    list: RwLock<SessionListCache>,
}

impl ChatSession {
    pub fn new(signals: SignalTable, geo: GeoResolver) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            signals,
            geo,
            list: RwLock::new(SessionListCache::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn signals(&self) -> &SignalTable {
        &self.signals
    }

    pub fn geo(&self) -> &GeoResolver {
        &self.geo
    }

    /// Identifier of the Nth item of the last recommendation list.
    ///
    /// Items without a usable identifier count as missing.
    pub async fn resolve_center_id(&self, one_based_index: usize) -> Option<String> {
        let list = self.list.read().await;
        list.resolve(one_based_index)
            .and_then(|item| item.center_id.clone())
            .filter(|id| !id.is_empty())
    }

    pub async fn replace_list(&self, items: Vec<RecommendationItem>) {
        self.list.write().await.replace(items);
    }

    /// Copy of the current list, for display.
    pub async fn list_snapshot(&self) -> Vec<RecommendationItem> {
        self.list.read().await.items().to_vec()
    }
}
