//! Selection value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSelectionSourceError;

/// Identifier of the capture action registered with the host
pub const SAVE_SELECTION_ACTION_ID: &str = "smartbookmarker_save_selection";

/// Trimmed, non-empty selected text.
///
/// Empty selections are not errors, they simply never become a
/// `SelectionText`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionText(String);

impl SelectionText {
    /// Trim raw selection text; returns `None` when nothing is left
    pub fn capture(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SelectionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selection-capture trigger as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Which registered action fired
    pub action_id: String,
    /// Raw selection text, if the host supplied any
    pub selection_text: Option<String>,
}

impl SelectionEvent {
    /// Event for the save-selection action
    pub fn save_selection(text: impl Into<String>) -> Self {
        Self {
            action_id: SAVE_SELECTION_ACTION_ID.to_string(),
            selection_text: Some(text.into()),
        }
    }

    /// Selection text, treating a missing value as empty
    pub fn text(&self) -> &str {
        self.selection_text.as_deref().unwrap_or("")
    }
}

/// Where the selected text is read from on the desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionKind {
    /// The X11/Wayland primary selection (highlighted text)
    #[default]
    Primary,
    /// The regular copy/paste clipboard
    Clipboard,
}

impl SelectionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Clipboard => "clipboard",
        }
    }
}

impl FromStr for SelectionKind {
    type Err = InvalidSelectionSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "clipboard" => Ok(Self::Clipboard),
            _ => Err(InvalidSelectionSourceError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
