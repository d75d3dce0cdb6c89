use super::intent::Intent;
use super::state::UiState;

/// Turns `(State, Intent)` into the next state.
///
/// Reducers never perform I/O. Side effects (requests, notifications) live
/// with whoever dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
