//! Settings store with per-run overrides

use async_trait::async_trait;

use crate::application::ports::SettingsStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Reads from an override config first, then from the wrapped store.
///
/// Writes always go to the wrapped store; overrides are never persisted.
pub struct OverlaySettingsStore<S: SettingsStore> {
    inner: S,
    overrides: AppConfig,
}

impl<S: SettingsStore> OverlaySettingsStore<S> {
    pub fn new(inner: S, overrides: AppConfig) -> Self {
        Self { inner, overrides }
    }
}

#[async_trait]
impl<S: SettingsStore> SettingsStore for OverlaySettingsStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        // Blank overrides (e.g. an empty env var) don't count as set
        match self.overrides.value_of(key)?.filter(|v| !v.trim().is_empty()) {
            Some(value) => Ok(Some(value)),
            None => self.inner.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.inner.set(key, value).await
    }
}
