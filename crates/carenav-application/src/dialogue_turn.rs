//! One B2C chat turn, from raw utterance to updated session state.

use std::sync::Arc;

use carenav_core::endpoint::ChatEndpoint;
use carenav_core::recommendation::{OutgoingRequest, is_recommendation};
use carenav_core::session::{ChatMessage, MessageRole};
use carenav_core::turn::{EMPTY_REPLY, TurnError, TurnOutcome};
use carenav_core::view::{BusyGuard, ChatView};
use tokio::sync::Mutex;
use tracing::{Instrument, debug, info, info_span};

use crate::session::ChatSession;

/// Greeting shown when the chat log is reset.
pub const GREETING: &str = "안녕하세요! 조건을 말해주면 근처 지역아동센터를 추천해드릴게요.\n\
예: '제일 가까운 곳 추천해줘', '정원20', '토요일', '3km', '5개 추천해줘'";

/// Sequences signal matching, list lookup, position acquisition, dispatch
/// and list update for one turn.
///
/// Turns are serialized: a second call waits until the first finishes.
/// No failure escapes a turn; each one becomes a bot bubble and a
/// [`TurnOutcome::Aborted`].
pub struct DialogueTurnOrchestrator {
    session: Arc<ChatSession>,
    endpoint: Arc<dyn ChatEndpoint>,
    view: Arc<dyn ChatView>,
    turn_lock: Mutex<()>,
}

impl DialogueTurnOrchestrator {
    pub fn new(
        session: Arc<ChatSession>,
        endpoint: Arc<dyn ChatEndpoint>,
        view: Arc<dyn ChatView>,
    ) -> Self {
        Self {
            session,
            endpoint,
            view,
            turn_lock: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &Arc<ChatSession> {
        &self.session
    }

    /// Clears the log and shows the greeting.
    pub fn reset(&self) {
        self.view.clear();
        self.view.append(ChatMessage::new(MessageRole::Bot, GREETING));
    }

    /// Runs one turn. Whitespace-only input is ignored without side effects.
    pub async fn handle_turn(&self, utterance: &str) -> TurnOutcome {
        let message = utterance.trim();
        if message.is_empty() {
            return TurnOutcome::Ignored;
        }

        let _turn = self.turn_lock.lock().await;
        let span = info_span!("turn", session_id = %self.session.id());

        self.view
            .append(ChatMessage::new(MessageRole::User, message));
        let _busy = BusyGuard::new(self.view.as_ref());

        let outcome = self.run(message).instrument(span).await;
        let reply = match &outcome {
            TurnOutcome::Answered { text, .. } => text.clone(),
            TurnOutcome::Aborted(err) => err.user_message(),
            TurnOutcome::Ignored => return outcome,
        };
        self.view.append(ChatMessage::new(MessageRole::Bot, reply));

        outcome
    }

    async fn run(&self, message: &str) -> TurnOutcome {
        let request = match self.build_request(message).await {
            Ok(request) => request,
            Err(err) => {
                info!(error = %err, "turn aborted before dispatch");
                return TurnOutcome::Aborted(err);
            }
        };

        let response = match self.endpoint.send(&request).await {
            Ok(response) => response,
            Err(err) => return TurnOutcome::Aborted(err.into()),
        };

        let text = response
            .text()
            .filter(|text| !text.is_empty())
            .unwrap_or(EMPTY_REPLY)
            .to_string();

        let list_updated = is_recommendation(&response);
        if list_updated {
            let items = response.centers();
            info!(count = items.len(), "recommendation list replaced");
            self.session.replace_list(items).await;
        } else {
            debug!("response is not a recommendation, list kept");
        }

        TurnOutcome::Answered { text, list_updated }
    }

    /// Builds the outgoing request, or the reason the turn cannot be sent.
    ///
    /// A list reference is resolved before anything else; the position is
    /// acquired last so a bad reference never prompts for location.
    pub async fn build_request(&self, message: &str) -> Result<OutgoingRequest, TurnError> {
        let mut request = OutgoingRequest::new(message);
        let signals = self.session.signals();

        if let Some(index) = signals.parse_list_reference(message) {
            let center_id = self
                .session
                .resolve_center_id(index)
                .await
                .ok_or(TurnError::NoPriorList)?;
            debug!(index, center_id = %center_id, "list reference resolved");
            request.selected_center_id = Some(center_id);
        }

        let required = signals.requires_location(message);
        debug!(required, "acquiring position");
        let position = self
            .session
            .geo()
            .acquire(required)
            .await
            .map_err(|cause| TurnError::LocationRequired { cause })?;

        if let Some(position) = position {
            request.latitude = Some(position.latitude);
            request.longitude = Some(position.longitude);
        }

        Ok(request)
    }
}
