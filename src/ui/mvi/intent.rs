//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Pointer and key input (drag, tap, retry)
/// - Asynchronous completions (fetch results, timer firings)
pub trait Intent: Send + 'static {}
