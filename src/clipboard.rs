use std::time::Duration;
#[cfg(target_os = "linux")]
use std::time::Instant;

use crate::error::ClipboardError;

/// How long the process keeps serving a copied value on Linux. X11 and
/// Wayland selections die with the owning process unless a clipboard
/// manager takes them over first.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) const SELECTION_HOLD: Duration = Duration::from_secs(15);

/// Destination for copied API keys
pub(crate) trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through arboard
#[derive(Debug, Default)]
pub(crate) struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        set_text(&mut clipboard, text).map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Blocks until another client owns the selection or the hold expires
#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::debug!(hold = ?SELECTION_HOLD, "serving clipboard selection");
    clipboard
        .set()
        .wait_until(Instant::now() + SELECTION_HOLD)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
