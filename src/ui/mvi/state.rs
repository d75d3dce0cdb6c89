/// Marker trait for renderable state.
///
/// `Default` is the at-rest state; `PartialEq` lets tests compare whole
/// states after a reduction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
