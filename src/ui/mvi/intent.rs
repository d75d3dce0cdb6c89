//! Marker trait for intents.

/// Something that happened: a key press, a request outcome.
///
/// Intents carry data only and are consumed by a [`super::Reducer`].
pub trait Intent: Send + 'static {}
