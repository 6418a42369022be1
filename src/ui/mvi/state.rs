//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloneable snapshots (the caller keeps the previous one to
/// diff against), comparable, and start from a `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
