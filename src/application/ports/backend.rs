//! Note backend port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::{HealthStatus, Note, SaveRequest, SaveResponse};

/// Backend transport and decoding errors
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("{0}")]
    RequestFailed(String),

    #[error("{0}")]
    ParseError(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),
}

/// Raw outcome of a save call that reached the service
#[derive(Debug, Clone)]
pub struct SaveReply {
    /// HTTP status code
    pub status: u16,
    /// Fields read from the JSON body
    pub response: SaveResponse,
}

impl SaveReply {
    /// Whether the HTTP status is 2xx
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for the remote note service
#[async_trait]
pub trait NoteBackend: Send + Sync {
    /// POST a save request to `endpoint`.
    ///
    /// Returns `Err` only when no JSON body was obtained (transport
    /// failure or a body that isn't JSON). Non-2xx replies with a JSON
    /// body are returned as `Ok`.
    async fn save(&self, endpoint: &str, request: &SaveRequest) -> Result<SaveReply, BackendError>;

    /// Check the health of the service behind `endpoint`
    async fn health(&self, endpoint: &str) -> Result<HealthStatus, BackendError>;

    /// List saved notes, optionally filtered by category
    async fn list_notes(
        &self,
        endpoint: &str,
        category: Option<&str>,
    ) -> Result<Vec<Note>, BackendError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl NoteBackend for Box<dyn NoteBackend> {
    async fn save(&self, endpoint: &str, request: &SaveRequest) -> Result<SaveReply, BackendError> {
        self.as_ref().save(endpoint, request).await
    }

    async fn health(&self, endpoint: &str) -> Result<HealthStatus, BackendError> {
        self.as_ref().health(endpoint).await
    }

    async fn list_notes(
        &self,
        endpoint: &str,
        category: Option<&str>,
    ) -> Result<Vec<Note>, BackendError> {
        self.as_ref().list_notes(endpoint, category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16) -> SaveReply {
        SaveReply {
            status,
            response: SaveResponse::default(),
        }
    }

    #[test]
    fn http_success_range() {
        assert!(reply(200).is_http_success());
        assert!(reply(201).is_http_success());
        assert!(!reply(199).is_http_success());
        assert!(!reply(302).is_http_success());
        assert!(!reply(500).is_http_success());
    }
}
