use crate::profile::{ErrorMap, ProfileField};
use crate::submit::SubmitOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace one field's value verbatim.
    Edit { field: ProfileField, value: String },
    /// Typed character on the focused field, filtered by its input kind.
    InsertChar(char),
    /// Pasted text on the focused field. A `+{dial}` number pasted into the
    /// phone field selects its country and replaces the national digits.
    Paste(String),
    /// Backspace on the focused field.
    DeleteChar,
    /// Empty the focused field.
    ClearField,
    FocusNext,
    FocusPrev,
    Focus(ProfileField),
    /// Select the next/previous country of the phone input.
    NextCountry,
    PrevCountry,
    /// Validate; on success the form enters `Submitting`.
    Submit,
    /// Validation ran elsewhere and failed.
    ValidationFailed(ErrorMap),
    /// API answered 201 Created.
    SubmitSucceeded,
    /// Request failed; `message` is what the user was told.
    SubmitFailed { message: String },
}

impl Intent for FormIntent {}

impl From<SubmitOutcome> for FormIntent {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Invalid(errors) => FormIntent::ValidationFailed(errors),
            SubmitOutcome::Created => FormIntent::SubmitSucceeded,
            SubmitOutcome::Failed { message } => FormIntent::SubmitFailed { message },
        }
    }
}
