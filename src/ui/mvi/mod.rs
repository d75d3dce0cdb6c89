//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key events ──────────┘
//! ```
//!
//! Views read state only; every change goes through a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
