// src/clipboard/mod.rs
// Host clipboard capability behind a narrow trait, so catalog logic can be
// exercised with a recording stub instead of a real clipboard.

use thiserror::Error;

/// Clipboard operation error type
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

impl ClipboardError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }
}

/// Clipboard operation result type
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Places text on the system clipboard, or a stand-in for it.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// System clipboard backed by `arboard`. Construction fails on hosts without
/// a usable clipboard (headless sessions, missing display server).
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> ClipboardResult<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::write_failed(e.to_string()))
    }
}

/// Accepts and discards everything. Used where no clipboard makes sense
/// (piped output, hosts where the system clipboard failed to open).
#[derive(Debug, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn copy_text(&mut self, _text: &str) -> ClipboardResult<()> {
        Ok(())
    }
}

/// Records every copied string. Test support.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_clipboard_accepts_anything() {
        let mut clipboard = NullClipboard;
        assert!(clipboard.copy_text("let agent = Agent::new();").is_ok());
    }

    #[test]
    fn test_recording_clipboard_keeps_text_verbatim() {
        let mut clipboard = RecordingClipboard::default();
        clipboard.copy_text("first\nsecond").unwrap();
        clipboard.copy_text("third").unwrap();
        assert_eq!(clipboard.copied, vec!["first\nsecond", "third"]);
    }

    #[test]
    fn test_error_display() {
        let err = ClipboardError::unavailable("no display server");
        assert_eq!(err.to_string(), "clipboard unavailable: no display server");
    }
}
