/// Marker trait for store state.
///
/// Derived views are computed from the state on demand, so a state value
/// must carry everything needed to render them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
