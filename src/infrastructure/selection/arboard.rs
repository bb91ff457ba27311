//! Cross-platform selection adapter using arboard
//!
//! The primary selection is only available on Linux (X11/Wayland); other
//! platforms always read the clipboard.

use async_trait::async_trait;

use crate::application::ports::{SelectionError, SelectionSource};
use crate::domain::capture::SelectionKind;

/// Selection adapter using arboard
pub struct ArboardSelection {
    kind: SelectionKind,
}

impl ArboardSelection {
    pub fn new(kind: SelectionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }
}

impl Default for ArboardSelection {
    fn default() -> Self {
        Self::new(SelectionKind::default())
    }
}

#[cfg(target_os = "linux")]
fn read_text(clipboard: &mut arboard::Clipboard, kind: SelectionKind) -> Result<String, arboard::Error> {
    use arboard::{GetExtLinux, LinuxClipboardKind};

    let target = match kind {
        SelectionKind::Primary => LinuxClipboardKind::Primary,
        SelectionKind::Clipboard => LinuxClipboardKind::Clipboard,
    };
    clipboard.get().clipboard(target).text()
}

#[cfg(not(target_os = "linux"))]
fn read_text(clipboard: &mut arboard::Clipboard, _kind: SelectionKind) -> Result<String, arboard::Error> {
    clipboard.get_text()
}

#[async_trait]
impl SelectionSource for ArboardSelection {
    async fn read(&self) -> Result<String, SelectionError> {
        let kind = self.kind;

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| SelectionError::SelectionUnavailable(e.to_string()))?;

            match read_text(&mut clipboard, kind) {
                Ok(text) => Ok(text),
                // Nothing selected is an empty selection, not a failure
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(SelectionError::ReadFailed(e.to_string())),
            }
        })
        .await
        .map_err(|e| SelectionError::ReadFailed(format!("Task join error: {}", e)))?
    }
}
