use crate::profile::phone::{country_at, Country};
use crate::profile::{ErrorMap, ProfileDraft, ProfileField};
use crate::ui::mvi::UiState;

/// Where the form is in the submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Nothing submitted yet, or the user is editing again.
    #[default]
    Idle,
    /// Last submit attempt failed local validation.
    Invalid,
    /// A create request is in flight.
    Submitting,
    /// Last request succeeded and the form was reset.
    Submitted,
    /// Last request failed; the draft is kept for resubmission.
    Failed { message: String },
}

/// Single source of truth for everything the form renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: ProfileDraft,
    /// Replaced wholesale on every submit attempt.
    pub errors: ErrorMap,
    pub focused: ProfileField,
    /// Index into [`crate::profile::phone::COUNTRIES`].
    pub phone_country: usize,
    pub phase: SubmitPhase,
}

impl UiState for FormState {}

impl FormState {
    pub fn with_country(phone_country: usize) -> Self {
        Self {
            phone_country,
            ..Self::default()
        }
    }

    pub fn country(&self) -> Country {
        country_at(self.phone_country)
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.draft.get(field)
    }

    pub fn error(&self, field: ProfileField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }
}
