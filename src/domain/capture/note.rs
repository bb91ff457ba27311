//! Save request/response wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::selection::SelectionText;

/// Marker used when the service rejects a save without saying why
pub const GENERIC_SAVE_FAILURE: &str = "save_failed";

/// Body posted to the save endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub text: String,
    /// Category override; the service classifies the text when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SaveRequest {
    pub fn new(text: SelectionText) -> Self {
        Self {
            text: text.into_inner(),
            category: None,
        }
    }

    /// Attach a category override; blank overrides are dropped
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

/// A categorized note returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub category: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub storage_mode: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

impl Note {
    /// Headline, or a placeholder for services that don't send one
    pub fn headline_or_untitled(&self) -> &str {
        self.headline.as_deref().unwrap_or("Untitled note")
    }
}

/// Body returned by the save endpoint.
///
/// Read field by field from whatever JSON the service sent, so a failure
/// reply keeps its `error` even when the other fields are malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveResponse {
    /// Only a literal `true` counts
    pub ok: bool,
    pub error: Option<String>,
    /// Raw `note` value, decoded on the success path only
    pub note: Option<Value>,
}

impl SaveResponse {
    pub fn from_body(body: &Value) -> Self {
        Self {
            ok: body.get("ok").and_then(Value::as_bool) == Some(true),
            error: body.get("error").and_then(Value::as_str).map(str::to_string),
            note: body.get("note").filter(|n| !n.is_null()).cloned(),
        }
    }

    /// Service-supplied error, or the generic marker
    pub fn error_or_generic(&self) -> &str {
        self.error
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(GENERIC_SAVE_FAILURE)
    }

    /// Decode the saved note, `None` when the body carried none
    pub fn decode_note(&self) -> Result<Option<Note>, serde_json::Error> {
        self.note.clone().map(serde_json::from_value).transpose()
    }
}

/// Response of the service health check
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub service: Option<String>,
}

/// Response of the note listing call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteList {
    #[serde(default)]
    pub notes: Vec<Note>,
}
