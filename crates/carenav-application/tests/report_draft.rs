mod support;

use std::sync::Arc;

use carenav_application::ReportDraftUsecase;
use carenav_application::report_usecase::{
    GENERATE_FALLBACK_ERROR, GENERATED_NOTICE, HINT_GENERATED, HINT_GENERATING,
    HINT_NETWORK_FAILED, HINT_NOT_GENERATED, HINT_SERVER_FAILED, REFINED_NOTICE,
};
use carenav_core::endpoint::EndpointError;
use carenav_core::report::{REPORT_TYPE, ReportForm, ReportMeta, ValidationError};
use carenav_core::session::MessageRole;
use carenav_core::turn::{GENERIC_TRANSPORT_ERROR, TurnError};
use serde_json::json;
use support::{RecordingView, ScriptedReports, ViewEvent};

const DRAFT: &str = "1. 개요\n  강북구 취약지역 현황\n\n2. 제언";

fn usecase(reports: Arc<ScriptedReports>) -> (ReportDraftUsecase, Arc<RecordingView>) {
    let view = Arc::new(RecordingView::default());
    (ReportDraftUsecase::new(reports, view.clone()), view)
}

fn form() -> ReportForm {
    ReportForm::new("강북구", Some(2021), Some(2023))
}

#[tokio::test]
async fn test_generate_renders_report_and_meta() {
    let reports = Arc::new(ScriptedReports::new(vec![Ok(json!({"report": DRAFT}))]));
    let (usecase, view) = usecase(reports.clone());

    let report = usecase.generate(&form()).await.unwrap();

    assert_eq!(report, DRAFT);
    let sent = reports.generated.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].district, "강북구");
    assert_eq!(sent[0].year_from, 2021);
    assert_eq!(sent[0].year_to, 2023);
    assert_eq!(sent[0].report_type, REPORT_TYPE);

    let events = view.events();
    assert!(matches!(&events[0], ViewEvent::Meta(meta) if meta.hint == HINT_GENERATING));
    assert!(events.contains(&ViewEvent::Report(DRAFT.to_string())));
    assert!(events.contains(&ViewEvent::Message(
        MessageRole::Bot,
        GENERATED_NOTICE.to_string()
    )));

    let meta = view.last_meta().unwrap();
    assert_eq!(meta.district.as_deref(), Some("강북구"));
    assert_eq!(meta.hint, HINT_GENERATED);
    assert_eq!(view.busy_transitions(), vec![true, false]);
    assert_eq!(usecase.current_report().await.as_deref(), Some(DRAFT));
}

#[tokio::test]
async fn test_generate_rejects_missing_district() {
    let reports = Arc::new(ScriptedReports::default());
    let (usecase, view) = usecase(reports.clone());

    let err = usecase
        .generate(&ReportForm::new("  ", Some(2021), Some(2023)))
        .await
        .unwrap_err();

    assert_eq!(err, TurnError::Validation(ValidationError::MissingDistrict));
    assert!(reports.generated.lock().unwrap().is_empty());
    assert_eq!(
        view.messages(),
        vec![(
            MessageRole::System,
            ValidationError::MissingDistrict.user_message().to_string()
        )]
    );
    assert!(view.busy_transitions().is_empty());
}

#[tokio::test]
async fn test_generate_rejects_inverted_years() {
    let reports = Arc::new(ScriptedReports::default());
    let (usecase, _view) = usecase(reports.clone());

    let err = usecase
        .generate(&ReportForm::new("강북구", Some(2024), Some(2020)))
        .await
        .unwrap_err();

    assert_eq!(err, TurnError::Validation(ValidationError::InvalidYearRange));
    assert!(reports.generated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_server_error() {
    let reports = Arc::new(ScriptedReports::new(vec![
        Err(EndpointError::Server {
            status: 500,
            message: Some("district not found".to_string()),
        }),
        Err(EndpointError::Server {
            status: 502,
            message: None,
        }),
    ]));
    let (usecase, view) = usecase(reports);

    usecase.generate(&form()).await.unwrap_err();
    assert_eq!(
        view.last_message(),
        Some((MessageRole::Bot, "district not found".to_string()))
    );
    assert_eq!(view.last_meta().unwrap().hint, HINT_SERVER_FAILED);

    usecase.generate(&form()).await.unwrap_err();
    assert_eq!(view.last_message().unwrap().1, GENERATE_FALLBACK_ERROR);
    assert_eq!(usecase.current_report().await, None);
}

#[tokio::test]
async fn test_generate_transport_error() {
    let reports = Arc::new(ScriptedReports::new(vec![Err(EndpointError::Transport(
        "connection refused".to_string(),
    ))]));
    let (usecase, view) = usecase(reports);

    let err = usecase.generate(&form()).await.unwrap_err();

    assert!(matches!(err, TurnError::Transport(_)));
    assert_eq!(
        view.last_message(),
        Some((MessageRole::System, GENERIC_TRANSPORT_ERROR.to_string()))
    );
    assert_eq!(view.last_meta().unwrap().hint, HINT_NETWORK_FAILED);
    assert_eq!(view.busy_transitions(), vec![true, false]);
}

#[tokio::test]
async fn test_refine_requires_a_draft() {
    let reports = Arc::new(ScriptedReports::default());
    let (usecase, _view) = usecase(reports.clone());

    let err = usecase.refine("더 짧게").await.unwrap_err();

    assert_eq!(err, TurnError::Validation(ValidationError::MissingReport));
    assert!(reports.refined.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_refine_replaces_current_draft() {
    let reports = Arc::new(ScriptedReports::new(vec![
        Ok(json!({"report": DRAFT})),
        Ok(json!({"report": "요약본"})),
    ]));
    let (usecase, view) = usecase(reports.clone());

    usecase.generate(&form()).await.unwrap();
    assert_eq!(
        usecase.refine("  ").await.unwrap_err(),
        TurnError::Validation(ValidationError::MissingInstruction)
    );
    let refined = usecase.refine("더 짧게").await.unwrap();

    assert_eq!(refined, "요약본");
    let sent = reports.refined.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].report, DRAFT);
    assert_eq!(sent[0].instruction, "더 짧게");
    assert_eq!(
        view.last_message(),
        Some((MessageRole::Bot, REFINED_NOTICE.to_string()))
    );
    assert_eq!(usecase.current_report().await.as_deref(), Some("요약본"));
}

#[tokio::test]
async fn test_reset_clears_draft() {
    let reports = Arc::new(ScriptedReports::new(vec![Ok(json!({"report": DRAFT}))]));
    let (usecase, view) = usecase(reports);

    usecase.generate(&form()).await.unwrap();
    usecase.reset().await;

    assert_eq!(usecase.current_report().await, None);
    let meta = view.last_meta().unwrap();
    assert_eq!(meta.district, None);
    assert_eq!(meta.hint, HINT_NOT_GENERATED);
}

#[tokio::test]
async fn test_reset_on_fresh_draft_shows_notice() {
    let reports = Arc::new(ScriptedReports::default());
    let (usecase, view) = usecase(reports.clone());

    usecase.reset().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Meta(ReportMeta::hint_only(HINT_NOT_GENERATED)),
            ViewEvent::Clear,
            ViewEvent::Message(MessageRole::System, HINT_NOT_GENERATED.to_string()),
        ]
    );
    assert!(view.last_meta().unwrap().tag().is_empty());
    assert!(reports.generated.lock().unwrap().is_empty());
}
