use std::sync::Arc;

use carenav_core::config::ClientConfig;
use carenav_core::error::Result;
use carenav_core::geo::GeoResolver;
use carenav_core::signal::SignalTable;
use carenav_core::view::{ChatView, ReportView};
use carenav_infrastructure::provider_from_config;
use carenav_interaction::{HttpChatEndpoint, HttpReportEndpoint};

use super::context::ChatSession;
use crate::dialogue_turn::DialogueTurnOrchestrator;
use crate::report_usecase::ReportDraftUsecase;

/// Builds sessions and use cases from a [`ClientConfig`].
pub struct ClientFactory {
    config: ClientConfig,
}

impl ClientFactory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates a fresh session: empty list, position not yet requested.
    pub fn create_session(&self) -> Result<Arc<ChatSession>> {
        let signals = SignalTable::default()
            .with_location_patterns(&self.config.signals.extra_location_patterns)?;
        let geo = GeoResolver::new(provider_from_config(&self.config.geo))
            .with_options(self.config.geo.position_options())
            .with_best_effort_wait(self.config.geo.best_effort_wait());
        Ok(Arc::new(ChatSession::new(signals, geo)))
    }

    /// Wires a chat orchestrator to the HTTP chat endpoint.
    pub fn create_chat(
        &self,
        session: Arc<ChatSession>,
        view: Arc<dyn ChatView>,
    ) -> Result<DialogueTurnOrchestrator> {
        let endpoint = HttpChatEndpoint::from_config(&self.config)?;
        Ok(DialogueTurnOrchestrator::new(
            session,
            Arc::new(endpoint),
            view,
        ))
    }

    /// Wires the report drafting use case to the HTTP report endpoints.
    pub fn create_report(&self, view: Arc<dyn ReportView>) -> Result<ReportDraftUsecase> {
        let endpoint = HttpReportEndpoint::from_config(&self.config)?;
        Ok(ReportDraftUsecase::new(Arc::new(endpoint), view))
    }
}
