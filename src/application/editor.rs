//! Endpoint configuration editor use case

use std::time::Duration;

use crate::domain::endpoint::{self, BACKEND_ENDPOINT_KEY};
use crate::domain::error::ConfigError;

use super::ports::SettingsStore;
use super::resolve_endpoint::EndpointResolver;

/// How long the save confirmation stays visible
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(1500);

/// Transient confirmation shown after a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
    /// Endpoint value that was persisted
    pub saved: String,
    /// Delay after which the confirmation clears itself
    pub clear_after: Duration,
}

/// Presents and persists the endpoint setting
pub struct ConfigurationEditor<S: SettingsStore> {
    resolver: EndpointResolver<S>,
}

impl<S: SettingsStore> ConfigurationEditor<S> {
    pub fn new(store: S) -> Self {
        Self {
            resolver: EndpointResolver::new(store),
        }
    }

    /// Value to pre-fill the endpoint field with
    pub async fn open(&self) -> String {
        self.resolver.resolve().await
    }

    /// Trim, default and persist `value`
    pub async fn save(&self, value: &str) -> Result<Confirmation, ConfigError> {
        let endpoint = endpoint::normalize_input(value);
        self.resolver
            .store()
            .set(BACKEND_ENDPOINT_KEY, &endpoint)
            .await?;

        Ok(Confirmation {
            message: "Saved.".to_string(),
            saved: endpoint,
            clear_after: CONFIRMATION_DURATION,
        })
    }
}
