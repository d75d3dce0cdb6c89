//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use profile_form::config::ApiConfig;
use profile_form::notify::ToastQueue;
use profile_form::profile::ProfileDraft;
use profile_form::submit::{HttpProfileApi, SubmissionHandler};
use profile_form::ui::form::{FormReducer, FormState};
use profile_form::ui::mvi::Reducer;
use std::net::TcpListener;
use std::time::Duration;

pub type TestSubmitter = SubmissionHandler<HttpProfileApi, ToastQueue>;

/// A draft that passes validation.
pub fn valid_draft() -> ProfileDraft {
    ProfileDraft {
        last_name: "Essomba".to_string(),
        first_name: "Claire".to_string(),
        email: "claire.essomba@example.cm".to_string(),
        address: "Bastos, Yaoundé".to_string(),
        phone: "+237 690001122".to_string(),
        date_of_birth: "1992-07-21".to_string(),
        job_title: "Cheffe de projet".to_string(),
    }
}

pub fn form_with(draft: ProfileDraft) -> FormState {
    FormState {
        draft,
        ..FormState::default()
    }
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        use_system_proxy: false,
        ..ApiConfig::default()
    }
}

/// Submission handler wired to `base_url`, plus the toast queue it notifies.
pub fn submitter(base_url: &str) -> (TestSubmitter, ToastQueue) {
    let api = HttpProfileApi::new(&api_config(base_url)).expect("client builds");
    let toasts = ToastQueue::new();
    let handler = SubmissionHandler::new(api, toasts.clone(), Duration::from_millis(5000));
    (handler, toasts)
}

/// Runs the headless submit flow on `state` and reduces its outcome.
pub async fn submit_form(handler: &TestSubmitter, state: FormState) -> FormState {
    let outcome = handler.submit(&state.draft).await;
    FormReducer::reduce(state, outcome.into())
}

/// A local URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
