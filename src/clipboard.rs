//! # Clipboard Sink
//!
//! Writes conversion results to the system clipboard. The loop only sees the
//! `ClipboardSink` trait, so tests can swap in an in-memory sink.

use log::{debug, info, warn};
use std::fmt;

/// Errors from talking to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened (no display, no daemon, ...).
    Unavailable(String),
    /// The clipboard opened but refused the text.
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Write(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: ClipboardSink + ?Sized> ClipboardSink for &mut C {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// The OS clipboard, opened on first use and kept for the rest of the run.
///
/// On X11 the selection is served by the owning process, so dropping the
/// handle right after a write would lose the contents.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                warn!("Failed to open system clipboard: {}", e);
                ClipboardError::Unavailable(e.to_string())
            })?;
            info!("System clipboard opened");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text);
        match result {
            Ok(()) => {
                debug!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                // Reopen on the next attempt
                self.inner = None;
                Err(ClipboardError::Write(e.to_string()))
            }
        }
    }
}
