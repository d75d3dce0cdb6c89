//! Profile form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Draft, error map, focus and submit phase
//! - `intent.rs` - Edits, focus moves, submit lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, SubmitPhase};
pub use view::render_form;
