//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Backend responses delivered by the request worker
pub trait Intent: Send + 'static {}
