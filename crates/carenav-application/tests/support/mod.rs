#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use carenav_application::ChatSession;
use carenav_core::endpoint::{ChatEndpoint, EndpointError, ReportEndpoint};
use carenav_core::geo::{GeoPosition, GeoResolver, LocationError, LocationProvider, PositionOptions};
use carenav_core::recommendation::{OutgoingRequest, ServerResponse};
use carenav_core::report::{RefineRequest, ReportMeta, ReportRequest, ReportResponse};
use carenav_core::session::{ChatMessage, MessageRole};
use carenav_core::signal::SignalTable;
use carenav_core::view::{ChatView, Control, ReportView};
use serde_json::Value;

/// Location provider with a fixed answer and an optional delay.
pub struct StubLocation {
    available: bool,
    delay: Option<Duration>,
    answer: Result<GeoPosition, LocationError>,
}

impl StubLocation {
    pub fn granting(latitude: f64, longitude: f64) -> Self {
        Self {
            available: true,
            delay: None,
            answer: Ok(GeoPosition::new(latitude, longitude)),
        }
    }

    pub fn denying() -> Self {
        Self {
            available: true,
            delay: None,
            answer: Err(LocationError::PermissionDenied),
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            ..Self::denying()
        }
    }

    /// Never answers within any test's patience.
    pub fn hanging() -> Self {
        Self {
            delay: Some(Duration::from_secs(3600)),
            ..Self::granting(37.5, 127.0)
        }
    }
}

#[async_trait]
impl LocationProvider for StubLocation {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<GeoPosition, LocationError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer.clone()
    }
}

pub fn session_with(provider: StubLocation) -> Arc<ChatSession> {
    let geo = GeoResolver::new(Arc::new(provider)).with_best_effort_wait(Duration::from_millis(50));
    Arc::new(ChatSession::new(SignalTable::default(), geo))
}

/// Chat endpoint replaying scripted answers and recording requests.
#[derive(Default)]
pub struct ScriptedChat {
    answers: Mutex<VecDeque<Result<Value, EndpointError>>>,
    pub requests: Mutex<Vec<OutgoingRequest>>,
}

impl ScriptedChat {
    pub fn new(answers: Vec<Result<Value, EndpointError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedChat {
    async fn send(&self, request: &OutgoingRequest) -> Result<ServerResponse, EndpointError> {
        self.requests.lock().unwrap().push(request.clone());
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected chat request");
        answer.map(ServerResponse::from_value)
    }
}

/// Report endpoint replaying scripted answers.
#[derive(Default)]
pub struct ScriptedReports {
    answers: Mutex<VecDeque<Result<Value, EndpointError>>>,
    pub generated: Mutex<Vec<ReportRequest>>,
    pub refined: Mutex<Vec<RefineRequest>>,
}

impl ScriptedReports {
    pub fn new(answers: Vec<Result<Value, EndpointError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            ..Self::default()
        }
    }

    fn next(&self) -> Result<ReportResponse, EndpointError> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected report request")
            .map(ReportResponse::from_value)
    }
}

#[async_trait]
impl ReportEndpoint for ScriptedReports {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportResponse, EndpointError> {
        self.generated.lock().unwrap().push(request.clone());
        self.next()
    }

    async fn refine(&self, request: &RefineRequest) -> Result<ReportResponse, EndpointError> {
        self.refined.lock().unwrap().push(request.clone());
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Busy(bool),
    Clear,
    Message(MessageRole, String),
    Report(String),
    Meta(ReportMeta),
}

/// Records everything a use case asks the front-end to render.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<(MessageRole, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Message(role, content) => Some((role, content)),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<(MessageRole, String)> {
        self.messages().pop()
    }

    pub fn busy_transitions(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Busy(busy) => Some(busy),
                _ => None,
            })
            .collect()
    }

    pub fn last_meta(&self) -> Option<ReportMeta> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Meta(meta) => Some(meta),
                _ => None,
            })
            .last()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn push_message(&self, message: ChatMessage) {
        self.push(ViewEvent::Message(message.role, message.content));
    }
}

impl Control for RecordingView {
    fn set_busy(&self, busy: bool) {
        self.push(ViewEvent::Busy(busy));
    }
}

impl ChatView for RecordingView {
    fn clear(&self) {
        self.push(ViewEvent::Clear);
    }

    fn append(&self, message: ChatMessage) {
        self.push_message(message);
    }
}

impl ReportView for RecordingView {
    fn clear(&self) {
        self.push(ViewEvent::Clear);
    }

    fn append(&self, message: ChatMessage) {
        self.push_message(message);
    }

    fn append_report(&self, text: &str) {
        self.push(ViewEvent::Report(text.to_string()));
    }

    fn set_meta(&self, meta: &ReportMeta) {
        self.push(ViewEvent::Meta(meta.clone()));
    }
}
