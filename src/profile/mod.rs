//! Profile draft, its field set and submit-time validation.

pub mod date;
mod draft;
pub mod phone;
mod validation;

pub use draft::{InputKind, ProfileDraft, ProfileField};
pub use validation::{validate, validate_with, Check, ErrorMap, Rule, RULES};
