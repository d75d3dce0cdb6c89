use crate::notify::{ActiveToast, ToastQueue};
use crate::profile::ProfileField;
use crate::submit::{HttpProfileApi, ProfileApi, SubmissionHandler, SubmitError};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub type ProfileSubmitter = SubmissionHandler<HttpProfileApi, ToastQueue>;

pub struct App {
    should_quit: bool,
    /// Form state (MVI pattern).
    form: FormState,
    toasts: ToastQueue,
    submitter: Arc<ProfileSubmitter>,
    /// Runtime the create requests run on.
    runtime: Handle,
    /// Where finished requests are reported back to the UI loop.
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(
        form: FormState,
        submitter: ProfileSubmitter,
        toasts: ToastQueue,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            form,
            toasts,
            submitter: Arc::new(submitter),
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        self.submitter.api().url()
    }

    pub fn toasts(&self) -> Vec<ActiveToast> {
        self.toasts.snapshot()
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn paste(&mut self, text: &str) {
        self.dispatch(FormIntent::Paste(text.to_string()));
    }

    /// Validates and, when valid, starts a create request.
    ///
    /// Repeated submits are not coalesced: each valid submit sends its own
    /// request.
    pub fn submit(&mut self) {
        self.dispatch(FormIntent::Submit);
        if !self.form.is_submitting() {
            let fields: Vec<ProfileField> = self.form.errors.fields().collect();
            tracing::debug!(?fields, "Profile form failed validation");
            return;
        }

        tracing::info!("Submitting profile");
        let draft = self.form.draft.clone();
        let submitter = Arc::clone(&self.submitter);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = submitter.api().create_profile(&draft).await;
            if events.send(AppEvent::SubmitFinished(result)).is_err() {
                tracing::trace!("Submit result dropped (UI loop gone)");
            }
        });
    }

    pub fn on_submit_finished(&mut self, result: Result<(), SubmitError>) {
        let outcome = self.submitter.complete(result);
        self.dispatch(outcome.into());
    }

    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss_latest();
    }

    pub fn on_tick(&mut self) {
        self.toasts.expire(Instant::now());
    }
}
