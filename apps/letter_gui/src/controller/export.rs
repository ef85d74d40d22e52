//! Copies the list summary to the system clipboard and tracks the short-lived
//! "Copied!" confirmation.

use std::time::{Duration, Instant};

use arboard::Clipboard;
use letter_core::{summary_text, NameList};
use thiserror::Error;

pub const COPY_CONFIRMATION_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// System clipboard, opened on first use. The handle stays alive for the life of the
/// app because some platforms only serve the copied text while it exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text)
            .map_err(ClipboardError::Write)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyConfirmation {
    visible_until: Option<Instant>,
}

impl CopyConfirmation {
    /// Shows the confirmation for [`COPY_CONFIRMATION_DURATION`] from `now`, replacing
    /// any pending reset.
    pub fn confirm(&mut self, now: Instant) {
        self.visible_until = Some(now + COPY_CONFIRMATION_DURATION);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible_until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[derive(Debug, Default)]
pub struct ClipboardExporter {
    confirmation: CopyConfirmation,
}

impl ClipboardExporter {
    pub fn confirmation(&self) -> CopyConfirmation {
        self.confirmation
    }

    /// Writes the summary of `list` to `sink`. A clipboard failure is logged and only
    /// means no confirmation is shown.
    pub fn copy(&mut self, list: &NameList, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        let text = summary_text(list);
        match sink.set_text(text) {
            Ok(()) => {
                tracing::info!(names = list.len(), "summary copied to clipboard");
                self.confirmation.confirm(now);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to copy summary to clipboard");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
