//! Sending the profile draft to the remote API.

mod client;
mod error;
mod handler;

pub use client::{HttpProfileApi, ProfileApi};
pub use error::{extract_message, SubmitError};
pub use handler::{SubmissionHandler, SubmitOutcome};
