//! Turn-level outcomes and the failure taxonomy shown to the user.

use thiserror::Error;

use crate::endpoint::EndpointError;
use crate::geo::GeoError;
use crate::report::ValidationError;

/// Fallback when the server failed without a readable `error` field.
pub const GENERIC_SERVER_ERROR: &str = "오류가 발생했습니다.";
/// Shown when the request itself failed.
pub const GENERIC_TRANSPORT_ERROR: &str = "요청 중 오류가 발생했습니다.";
/// Shown when a successful response carried no text.
pub const EMPTY_REPLY: &str = "(빈 응답)";

/// Why a turn ended without a normal answer.
///
/// Every variant is converted to a user-visible line at the turn boundary;
/// none of them ends the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("empty input")]
    EmptyInput,

    #[error("list reference without a prior recommendation list")]
    NoPriorList,

    /// The utterance needs a position and none could be acquired.
    #[error("location required: {cause}")]
    LocationRequired { cause: GeoError },

    #[error("server error: {}", .0.as_deref().unwrap_or("<no message>"))]
    Server(Option<String>),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TurnError {
    /// The line shown in place of the bot reply.
    pub fn user_message(&self) -> String {
        match self {
            TurnError::EmptyInput => String::new(),
            TurnError::NoPriorList => {
                "‘n번 상세’는 직전에 추천된 목록이 있어야 해요. 먼저 추천을 받아줘!".to_string()
            }
            TurnError::LocationRequired {
                cause: GeoError::CapabilityUnavailable,
            } => "이 요청은 위치가 필요해요. 이 환경에서는 위치를 확인할 수 없어요. 설정에 위치를 지정한 후 다시 전송해줘.".to_string(),
            TurnError::LocationRequired { .. } => {
                "이 요청은 위치가 필요해요. 위치 허용 후 다시 전송해줘.".to_string()
            }
            TurnError::Server(message) => message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
            TurnError::Transport(_) => GENERIC_TRANSPORT_ERROR.to_string(),
            TurnError::Validation(err) => err.user_message().to_string(),
        }
    }
}

impl From<EndpointError> for TurnError {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::Server { message, .. } => TurnError::Server(message),
            EndpointError::Transport(reason) => TurnError::Transport(reason),
        }
    }
}

/// Result of one chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Empty input, nothing happened.
    Ignored,
    /// The server answered.
    Answered {
        text: String,
        /// Whether the session list cache was replaced by this answer.
        list_updated: bool,
    },
    /// The turn stopped early; the user saw `error.user_message()`.
    Aborted(TurnError),
}

impl TurnOutcome {
    /// Whether a request was sent during this turn, including requests
    /// that failed in transit.
    pub fn was_dispatched(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Answered { .. }
                | TurnOutcome::Aborted(TurnError::Server(_) | TurnError::Transport(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_prefers_server_text() {
        let err: TurnError = EndpointError::Server {
            status: 400,
            message: Some("No msg".into()),
        }
        .into();
        assert_eq!(err.user_message(), "No msg");
    }

    #[test]
    fn test_server_error_falls_back_to_generic() {
        assert_eq!(TurnError::Server(None).user_message(), GENERIC_SERVER_ERROR);
        assert_eq!(
            TurnError::Server(Some("  ".into())).user_message(),
            GENERIC_SERVER_ERROR
        );
    }

    #[test]
    fn test_transport_error_hides_details() {
        let err: TurnError = EndpointError::Transport("connection refused".into()).into();
        assert_eq!(err.user_message(), GENERIC_TRANSPORT_ERROR);
    }

    #[test]
    fn test_location_messages_depend_on_cause() {
        let denied = TurnError::LocationRequired {
            cause: GeoError::PositionUnavailable("denied".into()),
        };
        let missing = TurnError::LocationRequired {
            cause: GeoError::CapabilityUnavailable,
        };
        assert!(denied.user_message().starts_with("이 요청은 위치가 필요해요."));
        assert!(missing.user_message().contains("설정에 위치를 지정"));
    }

    #[test]
    fn test_was_dispatched_covers_sent_requests() {
        assert!(TurnOutcome::Aborted(TurnError::Transport("timeout".into())).was_dispatched());
        assert!(TurnOutcome::Aborted(TurnError::Server(None)).was_dispatched());
        assert!(!TurnOutcome::Aborted(TurnError::NoPriorList).was_dispatched());
        assert!(!TurnOutcome::Ignored.was_dispatched());
    }

    #[test]
    fn test_validation_error_uses_inline_guidance() {
        let err: TurnError = ValidationError::MissingDistrict.into();
        assert_eq!(err.user_message(), "자치구를 선택해줘.");
    }
}
