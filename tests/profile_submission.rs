mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{form_with, submit_form, submitter, unreachable_base_url, valid_draft};
use profile_form::notify::{Severity, ERROR_TITLE, GENERIC_ERROR_DESCRIPTION, SUCCESS_TITLE};
use profile_form::profile::{ProfileDraft, ProfileField};
use profile_form::submit::SubmitOutcome;
use profile_form::ui::form::SubmitPhase;

#[tokio::test]
async fn valid_submit_posts_once_with_wire_names() {
    let api = MockApi::start().await;
    let (handler, _toasts) = submitter(&api.base_url());

    submit_form(&handler, form_with(valid_draft())).await;

    let requests = api.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/v1/profiles/create");
    assert!(request
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/json")));

    let body = request.json();
    let draft = valid_draft();
    assert_eq!(body.as_object().unwrap().len(), 7);
    for field in ProfileField::ALL {
        assert_eq!(body[field.wire_name()], draft.get(field), "{}", field.wire_name());
    }
}

#[tokio::test]
async fn created_resets_draft_and_notifies_success() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::created()).await;
    let (handler, toasts) = submitter(&api.base_url());

    let mut form = form_with(valid_draft());
    form.focused = ProfileField::JobTitle;
    let state = submit_form(&handler, form).await;

    assert_eq!(state.draft, ProfileDraft::default());
    assert!(state.errors.is_empty());
    assert_eq!(state.phase, SubmitPhase::Submitted);
    assert_eq!(state.focused, ProfileField::LastName);

    let shown = toasts.snapshot();
    assert_eq!(shown.len(), 1);
    let notification = &shown[0].notification;
    assert_eq!(notification.status, Severity::Success);
    assert_eq!(notification.title, SUCCESS_TITLE);
    assert_eq!(notification.duration.as_millis(), 5000);
    assert!(notification.closable);
}

#[tokio::test]
async fn rejection_keeps_draft_and_shows_server_message() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::with_message(409, "Cet email existe déjà"))
        .await;
    let (handler, toasts) = submitter(&api.base_url());

    let state = submit_form(&handler, form_with(valid_draft())).await;

    assert_eq!(state.draft, valid_draft());
    assert_eq!(
        state.phase,
        SubmitPhase::Failed {
            message: "Cet email existe déjà".to_string()
        }
    );

    let shown = toasts.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].notification.status, Severity::Error);
    assert_eq!(shown[0].notification.title, ERROR_TITLE);
    assert_eq!(shown[0].notification.description, "Cet email existe déjà");
}

#[tokio::test]
async fn rejection_without_message_uses_generic_text() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::status(500)).await;
    let (handler, toasts) = submitter(&api.base_url());

    let state = submit_form(&handler, form_with(valid_draft())).await;

    assert_eq!(state.draft, valid_draft());
    assert_eq!(
        toasts.snapshot()[0].notification.description,
        GENERIC_ERROR_DESCRIPTION
    );
}

#[tokio::test]
async fn success_status_other_than_created_is_a_failure() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::status(200)).await;
    let (handler, toasts) = submitter(&api.base_url());

    let state = submit_form(&handler, form_with(valid_draft())).await;

    assert_eq!(state.draft, valid_draft());
    assert!(matches!(state.phase, SubmitPhase::Failed { .. }));
    assert_eq!(toasts.snapshot()[0].notification.status, Severity::Error);
}

#[tokio::test]
async fn connection_failure_keeps_draft_and_notifies() {
    let (handler, toasts) = submitter(&unreachable_base_url());

    let state = submit_form(&handler, form_with(valid_draft())).await;

    assert_eq!(state.draft, valid_draft());
    let shown = toasts.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].notification.description, GENERIC_ERROR_DESCRIPTION);
}

#[tokio::test]
async fn each_missing_field_blocks_the_request() {
    let api = MockApi::start().await;
    let (handler, toasts) = submitter(&api.base_url());

    for field in ProfileField::ALL {
        let draft = valid_draft().update(field, "");
        let state = submit_form(&handler, form_with(draft.clone())).await;

        assert_eq!(state.errors.len(), 1, "{field}");
        assert!(state.errors.contains(field));
        assert_eq!(state.phase, SubmitPhase::Invalid);
        assert_eq!(state.draft, draft);
    }

    assert!(api.captured_requests().await.is_empty());
    assert!(toasts.is_empty(), "validation errors are never toasts");
}

#[tokio::test]
async fn malformed_email_blocks_the_request() {
    let api = MockApi::start().await;
    let (handler, toasts) = submitter(&api.base_url());

    let draft = valid_draft().update(ProfileField::Email, "not-an-email");
    let state = submit_form(&handler, form_with(draft)).await;

    assert_eq!(
        state.errors.get(ProfileField::Email),
        Some("L'email est invalide")
    );
    assert!(api.captured_requests().await.is_empty());
    assert!(toasts.is_empty());
}

#[tokio::test]
async fn failed_then_successful_resubmit() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::status(503)).await;
    api.enqueue_response(MockResponse::created()).await;
    let (handler, toasts) = submitter(&api.base_url());

    let state = submit_form(&handler, form_with(valid_draft())).await;
    assert_eq!(state.draft, valid_draft());

    let state = submit_form(&handler, state).await;
    assert!(state.draft.is_blank());
    assert_eq!(api.captured_requests().await.len(), 2);

    let statuses: Vec<Severity> = toasts
        .snapshot()
        .iter()
        .map(|toast| toast.notification.status)
        .collect();
    assert_eq!(statuses, vec![Severity::Success, Severity::Error]);
}

#[tokio::test]
async fn outcome_reports_each_result_without_touching_ui_state() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::with_message(400, "Téléphone refusé"))
        .await;
    let (handler, _toasts) = submitter(&api.base_url());

    let draft = valid_draft();
    assert_eq!(
        handler.submit(&draft).await,
        SubmitOutcome::Failed {
            message: "Téléphone refusé".to_string()
        }
    );
    assert_eq!(handler.submit(&draft).await, SubmitOutcome::Created);

    match handler.submit(&ProfileDraft::default()).await {
        SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), ProfileField::ALL.len()),
        other => panic!("Expected Invalid, got {:?}", other),
    }
    assert_eq!(api.captured_requests().await.len(), 2);
}
