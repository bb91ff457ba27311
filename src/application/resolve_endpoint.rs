//! Endpoint resolution use case

use crate::domain::endpoint::{self, BACKEND_ENDPOINT_KEY};

use super::ports::SettingsStore;

/// Resolves the save endpoint from persisted settings
pub struct EndpointResolver<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> EndpointResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the endpoint.
    ///
    /// Never fails: a missing, blank or unreadable value yields the default.
    pub async fn resolve(&self) -> String {
        let stored = self.store.get(BACKEND_ENDPOINT_KEY).await.unwrap_or(None);
        endpoint::resolve_stored(stored.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::endpoint::DEFAULT_ENDPOINT;
    use crate::domain::error::ConfigError;
    use crate::infrastructure::config::MemorySettingsStore;
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl SettingsStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, ConfigError> {
            Err(ConfigError::ReadError("disk on fire".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), ConfigError> {
            Err(ConfigError::WriteError("disk on fire".to_string()))
        }
    }

    #[tokio::test]
    async fn empty_store_resolves_default() {
        let resolver = EndpointResolver::new(MemorySettingsStore::new());
        assert_eq!(resolver.resolve().await, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn blank_values_resolve_default() {
        for value in ["", "   "] {
            let store = MemorySettingsStore::with_entry(BACKEND_ENDPOINT_KEY, value);
            let resolver = EndpointResolver::new(store);
            assert_eq!(resolver.resolve().await, DEFAULT_ENDPOINT);
        }
    }

    #[tokio::test]
    async fn stored_value_wins() {
        let store = MemorySettingsStore::with_entry(BACKEND_ENDPOINT_KEY, "https://example.com/save");
        let resolver = EndpointResolver::new(store);
        assert_eq!(resolver.resolve().await, "https://example.com/save");
    }

    #[tokio::test]
    async fn read_failure_degrades_to_default() {
        let resolver = EndpointResolver::new(BrokenStore);
        assert_eq!(resolver.resolve().await, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let store = MemorySettingsStore::with_entry(BACKEND_ENDPOINT_KEY, "http://a/save");
        let resolver = EndpointResolver::new(store);
        let first = resolver.resolve().await;
        let second = resolver.resolve().await;
        assert_eq!(first, second);
    }
}
