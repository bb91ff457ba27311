//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::capture::SelectionKind;
use crate::domain::endpoint::{BACKEND_ENDPOINT_KEY, DEFAULT_ENDPOINT};
use crate::domain::error::ConfigError;

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    BACKEND_ENDPOINT_KEY,
    "notify",
    "selection",
    "linux.selection_tool",
];

/// Valid selection tool values (Linux)
pub const VALID_SELECTION_TOOLS: &[&str] = &["arboard", "wl-paste"];

/// Default selection tool
pub const DEFAULT_SELECTION_TOOL: &str = "arboard";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub selection_tool: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_endpoint: Option<String>,
    pub notify: Option<bool>,
    pub selection: Option<String>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend_endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            notify: Some(true),
            selection: Some(SelectionKind::default().to_string()),
            linux: Some(LinuxConfig {
                selection_tool: Some(DEFAULT_SELECTION_TOOL.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend_endpoint: other.backend_endpoint.or(self.backend_endpoint),
            notify: other.notify.or(self.notify),
            selection: other.selection.or(self.selection),
            linux: match (self.linux, other.linux) {
                (None, None) => None,
                (Some(b), None) => Some(b),
                (None, Some(o)) => Some(o),
                (Some(b), Some(o)) => Some(LinuxConfig {
                    selection_tool: o.selection_tool.or(b.selection_tool),
                }),
            },
        }
    }

    /// Raw value stored under a dotted key, if set
    pub fn value_of(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = match key {
            BACKEND_ENDPOINT_KEY => self.backend_endpoint.clone(),
            "notify" => self.notify.map(|b| b.to_string()),
            "selection" => self.selection.clone(),
            "linux.selection_tool" => self.linux.as_ref().and_then(|l| l.selection_tool.clone()),
            _ => return Err(ConfigError::unknown_key(key, VALID_CONFIG_KEYS)),
        };
        Ok(value)
    }

    /// Validate and store a value under a dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            BACKEND_ENDPOINT_KEY => self.backend_endpoint = Some(value.to_string()),
            "notify" => {
                self.notify = Some(parse_bool(value).ok_or_else(|| {
                    ConfigError::ValidationError {
                        key: key.to_string(),
                        message: "Value must be 'true' or 'false'".to_string(),
                    }
                })?);
            }
            "selection" => {
                let kind = value
                    .parse::<SelectionKind>()
                    .map_err(|e| ConfigError::ValidationError {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
                self.selection = Some(kind.to_string());
            }
            "linux.selection_tool" => {
                let lower = value.trim().to_lowercase();
                if !VALID_SELECTION_TOOLS.contains(&lower.as_str()) {
                    return Err(ConfigError::ValidationError {
                        key: key.to_string(),
                        message: format!(
                            "Invalid value '{}'. Valid options: {}",
                            value,
                            VALID_SELECTION_TOOLS.join(", ")
                        ),
                    });
                }
                self.linux.get_or_insert_with(LinuxConfig::default).selection_tool = Some(lower);
            }
            _ => return Err(ConfigError::unknown_key(key, VALID_CONFIG_KEYS)),
        }
        Ok(())
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get selection source, or primary if not set/invalid
    pub fn selection_or_default(&self) -> SelectionKind {
        self.selection
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get selection tool preference, or "arboard" if not set
    pub fn selection_tool_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.selection_tool.as_deref())
            .unwrap_or(DEFAULT_SELECTION_TOOL)
    }
}

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
