//! B2B report drafting: validate, post, render.

use std::sync::Arc;

use carenav_core::endpoint::{EndpointError, ReportEndpoint};
use carenav_core::report::{RefineRequest, ReportForm, ReportMeta, ReportRequest};
use carenav_core::session::{ChatMessage, MessageRole};
use carenav_core::turn::{GENERIC_TRANSPORT_ERROR, TurnError};
use carenav_core::view::{BusyGuard, ReportView};
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const HINT_NOT_GENERATED: &str =
    "초안 생성 전입니다. “초안 생성”을 누르면 아래에 보고서가 출력됩니다.";
pub const HINT_GENERATING: &str = "초안 생성 중…";
pub const HINT_GENERATED: &str = "초안 생성 완료. 아래에 보고서가 출력되었습니다.";
pub const HINT_SERVER_FAILED: &str = "생성 실패: 오류가 발생했습니다.";
pub const HINT_NETWORK_FAILED: &str = "요청 실패: 네트워크 오류";
pub const GENERATED_NOTICE: &str = "초안 생성 완료.";
pub const REFINED_NOTICE: &str = "수정 완료.";
pub const GENERATE_FALLBACK_ERROR: &str = "생성 중 오류가 발생했습니다.";
pub const REFINE_FALLBACK_ERROR: &str = "수정 중 오류가 발생했습니다.";

#[derive(Default)]
struct DraftState {
    request: Option<ReportRequest>,
    report: Option<String>,
}

/// Drives the report form: one draft at a time, refinable afterwards.
pub struct ReportDraftUsecase {
    endpoint: Arc<dyn ReportEndpoint>,
    view: Arc<dyn ReportView>,
    state: Mutex<DraftState>,
}

impl ReportDraftUsecase {
    pub fn new(endpoint: Arc<dyn ReportEndpoint>, view: Arc<dyn ReportView>) -> Self {
        Self {
            endpoint,
            view,
            state: Mutex::new(DraftState::default()),
        }
    }

    /// Clears the log, the header and the stored draft.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        *state = DraftState::default();
        self.view.set_meta(&ReportMeta::hint_only(HINT_NOT_GENERATED));
        self.view.clear();
        self.view
            .append(ChatMessage::new(MessageRole::System, HINT_NOT_GENERATED));
    }

    /// The last generated (or refined) report text.
    pub async fn current_report(&self) -> Option<String> {
        self.state.lock().await.report.clone()
    }

    /// Validates the form and requests a new draft.
    ///
    /// Validation failures are shown inline and never reach the network.
    pub async fn generate(&self, form: &ReportForm) -> Result<String, TurnError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.view
                    .append(ChatMessage::new(MessageRole::System, err.user_message()));
                return Err(err.into());
            }
        };

        let mut state = self.state.lock().await;
        self.view
            .set_meta(&ReportMeta::for_request(&request, HINT_GENERATING));
        let _busy = BusyGuard::new(self.view.as_ref());

        self.view.clear();
        self.view
            .append(ChatMessage::new(MessageRole::User, request.summary()));

        match self.endpoint.generate(&request).await {
            Ok(response) => {
                let report = response.report().unwrap_or_default().to_string();
                info!(chars = report.chars().count(), "report draft received");
                self.view
                    .append(ChatMessage::new(MessageRole::Bot, GENERATED_NOTICE));
                self.view.append_report(&report);
                self.view
                    .set_meta(&ReportMeta::for_request(&request, HINT_GENERATED));
                state.report = Some(report.clone());
                state.request = Some(request);
                Ok(report)
            }
            Err(err) => {
                self.show_failure(&err, Some(&request), GENERATE_FALLBACK_ERROR);
                Err(err.into())
            }
        }
    }

    /// Rewrites the current draft according to `instruction`.
    pub async fn refine(&self, instruction: &str) -> Result<String, TurnError> {
        let mut state = self.state.lock().await;

        let request =
            match RefineRequest::new(state.report.as_deref().unwrap_or_default(), instruction) {
                Ok(request) => request,
                Err(err) => {
                    self.view
                        .append(ChatMessage::new(MessageRole::System, err.user_message()));
                    return Err(err.into());
                }
            };

        let _busy = BusyGuard::new(self.view.as_ref());
        self.view
            .append(ChatMessage::new(MessageRole::User, request.instruction.clone()));

        match self.endpoint.refine(&request).await {
            Ok(response) => {
                let report = response.report().unwrap_or_default().to_string();
                self.view
                    .append(ChatMessage::new(MessageRole::Bot, REFINED_NOTICE));
                self.view.append_report(&report);
                state.report = Some(report.clone());
                Ok(report)
            }
            Err(err) => {
                self.show_failure(&err, state.request.as_ref(), REFINE_FALLBACK_ERROR);
                Err(err.into())
            }
        }
    }

    fn show_failure(&self, err: &EndpointError, request: Option<&ReportRequest>, fallback: &str) {
        warn!(error = %err, "report request failed");

        let (message, hint) = match err {
            EndpointError::Server { message, .. } => (
                ChatMessage::new(
                    MessageRole::Bot,
                    message
                        .clone()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| fallback.to_string()),
                ),
                HINT_SERVER_FAILED,
            ),
            EndpointError::Transport(_) => (
                ChatMessage::new(MessageRole::System, GENERIC_TRANSPORT_ERROR),
                HINT_NETWORK_FAILED,
            ),
        };
        self.view.append(message);

        let meta = match request {
            Some(request) => ReportMeta::for_request(request, hint),
            None => ReportMeta::hint_only(hint),
        };
        self.view.set_meta(&meta);
    }
}
