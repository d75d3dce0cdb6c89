use crate::profile::phone::{self, next_country, prev_country};
use crate::profile::{date, validate, ErrorMap, InputKind, ProfileDraft, ProfileField};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormState, SubmitPhase};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, value } => edit(state, field, value),
            FormIntent::InsertChar(ch) => {
                let field = state.focused;
                let current = state.value(field);
                let value = match field.input_kind() {
                    InputKind::Text | InputKind::Email if ch.is_control() => current.to_string(),
                    InputKind::Text | InputKind::Email => format!("{current}{ch}"),
                    InputKind::Date => date::push_char(current, ch),
                    InputKind::Phone => phone::push_char(current, state.country(), ch),
                };
                edit(state, field, value)
            }
            FormIntent::Paste(text) => paste(state, &text),
            FormIntent::DeleteChar => {
                let field = state.focused;
                let current = state.value(field);
                let value = match field.input_kind() {
                    InputKind::Text | InputKind::Email => {
                        let mut value = current.to_string();
                        value.pop();
                        value
                    }
                    InputKind::Date => date::pop_char(current),
                    InputKind::Phone => phone::pop_char(current, state.country()),
                };
                edit(state, field, value)
            }
            FormIntent::ClearField => {
                let field = state.focused;
                edit(state, field, String::new())
            }
            FormIntent::FocusNext => FormState {
                focused: state.focused.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: state.focused.prev(),
                ..state
            },
            FormIntent::Focus(field) => FormState {
                focused: field,
                ..state
            },
            FormIntent::NextCountry => select_country(state, next_country),
            FormIntent::PrevCountry => select_country(state, prev_country),
            FormIntent::Submit => {
                let errors = validate(&state.draft);
                let phase = if errors.is_empty() {
                    SubmitPhase::Submitting
                } else {
                    SubmitPhase::Invalid
                };
                FormState {
                    errors,
                    phase,
                    ..state
                }
            }
            FormIntent::ValidationFailed(errors) => FormState {
                errors,
                phase: SubmitPhase::Invalid,
                ..state
            },
            FormIntent::SubmitSucceeded => FormState {
                draft: ProfileDraft::default(),
                errors: ErrorMap::new(),
                focused: ProfileField::default(),
                phone_country: state.phone_country,
                phase: SubmitPhase::Submitted,
            },
            FormIntent::SubmitFailed { message } => FormState {
                phase: SubmitPhase::Failed { message },
                ..state
            },
        }
    }
}

fn edit(state: FormState, field: ProfileField, value: String) -> FormState {
    let phase = if state.is_submitting() {
        SubmitPhase::Submitting
    } else {
        SubmitPhase::Idle
    };
    FormState {
        draft: state.draft.update(field, value),
        phase,
        ..state
    }
}

fn paste(state: FormState, text: &str) -> FormState {
    if state.focused.input_kind() == InputKind::Phone {
        if let Some((phone_country, digits)) =
            phone::split_international(text, state.phone_country)
        {
            let value = phone::compose(phone::country_at(phone_country), &digits);
            return edit(
                FormState {
                    phone_country,
                    ..state
                },
                ProfileField::Phone,
                value,
            );
        }
    }
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(FormIntent::InsertChar)
        .fold(state, FormReducer::reduce)
}

fn select_country(state: FormState, step: fn(usize) -> usize) -> FormState {
    let phone_country = step(state.phone_country);
    let phone = phone::with_country(&state.draft.phone, phone::country_at(phone_country));
    FormState {
        draft: state.draft.update(ProfileField::Phone, phone),
        phone_country,
        ..state
    }
}
