//! Clipboard access for copying the referral link.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard, opened lazily on first copy.
///
/// Opening can fail on headless machines; the failure is reported per copy
/// instead of at start-up.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            slot @ None => slot.insert(Clipboard::new().map_err(ClipboardError::Unavailable)?),
        };
        clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}
