//! Configuration port interfaces

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for whole-file configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (may have None fields if file doesn't exist)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save configuration to storage.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize configuration file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}

/// Port for keyed access to persisted settings.
///
/// Single-key reads and writes, last write wins.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`; `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Store `value` under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

#[async_trait]
impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.as_ref().set(key, value).await
    }
}

#[async_trait]
impl<'a, T: SettingsStore + ?Sized> SettingsStore for &'a T {
    async fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value).await
    }
}
