//! Selection port interface

use async_trait::async_trait;
use thiserror::Error;

/// Selection read errors
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    #[error("wl-paste not found. Please install wl-clipboard.")]
    WlPasteNotFound,

    #[error("Selection unavailable: {0}")]
    SelectionUnavailable(String),

    #[error("Failed to read selection: {0}")]
    ReadFailed(String),
}

/// Port for reading the user's current text selection
#[async_trait]
pub trait SelectionSource: Send + Sync {
    /// Read the current selection.
    ///
    /// An empty selection is returned as an empty string, not an error.
    async fn read(&self) -> Result<String, SelectionError>;
}

/// Blanket implementation for boxed selection sources
#[async_trait]
impl SelectionSource for Box<dyn SelectionSource> {
    async fn read(&self) -> Result<String, SelectionError> {
        self.as_ref().read().await
    }
}
