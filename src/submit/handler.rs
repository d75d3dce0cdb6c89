use std::time::Duration;

use crate::notify::{Notification, NotificationSink};
use crate::profile::{validate, ErrorMap, ProfileDraft, ProfileField};
use crate::submit::client::ProfileApi;
use crate::submit::error::SubmitError;

/// Result of one submit attempt, as the form should see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(ErrorMap),
    /// API answered 201 Created.
    Created,
    /// Request failed; `message` is what the user was told.
    Failed { message: String },
}

/// Runs the submit cycle: validate, send, then notify.
///
/// The interactive UI validates through its reducer, spawns the request itself
/// and hands the result to [`complete`](Self::complete);
/// [`submit`](Self::submit) chains every step.
pub struct SubmissionHandler<A, N> {
    api: A,
    sink: N,
    notification_duration: Duration,
}

impl<A: ProfileApi, N: NotificationSink> SubmissionHandler<A, N> {
    pub fn new(api: A, sink: N, notification_duration: Duration) -> Self {
        Self {
            api,
            sink,
            notification_duration,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Turns the result of a create request into an outcome and notifies the
    /// user.
    pub fn complete(&self, result: Result<(), SubmitError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                tracing::info!("Profile created");
                self.sink
                    .notify(Notification::submitted(self.notification_duration));
                SubmitOutcome::Created
            }
            Err(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "Profile submission failed");
                let notification =
                    Notification::submit_failed(err.server_message(), self.notification_duration);
                let message = notification.description.clone();
                self.sink.notify(notification);
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Validates and, when valid, sends the draft and waits for the outcome.
    ///
    /// Validation failures are never notified.
    pub async fn submit(&self, draft: &ProfileDraft) -> SubmitOutcome {
        let errors = validate(draft);
        if !errors.is_empty() {
            let fields: Vec<ProfileField> = errors.fields().collect();
            tracing::debug!(?fields, "Profile form failed validation");
            return SubmitOutcome::Invalid(errors);
        }
        tracing::info!("Submitting profile");
        let result = self.api.create_profile(draft).await;
        self.complete(result)
    }
}
