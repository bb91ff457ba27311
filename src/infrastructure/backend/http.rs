//! HTTP note backend adapter

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::Url;

use crate::application::ports::{BackendError, NoteBackend, SaveReply};
use crate::domain::capture::{HealthStatus, Note, NoteList, SaveRequest, SaveResponse};

/// Path of the health check on the service origin
const HEALTH_PATH: &str = "/health";

/// Path of the note listing on the service origin
const NOTES_PATH: &str = "/api/notes";

/// JSON-over-HTTP client for the SmartBookmarker service
pub struct HttpNoteBackend {
    client: reqwest::Client,
}

impl HttpNoteBackend {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Resolve `path` against the origin of `endpoint`
    fn service_url(endpoint: &str, path: &str) -> Result<Url, BackendError> {
        let invalid = |message: String| BackendError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message,
        };
        let base = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        base.join(path).map_err(|e| invalid(e.to_string()))
    }

    /// Build the note listing URL
    fn notes_url(endpoint: &str, category: Option<&str>) -> Result<Url, BackendError> {
        let mut url = Self::service_url(endpoint, NOTES_PATH)?;
        if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
            url.query_pairs_mut().append_pair("category", category);
        }
        Ok(url)
    }

    /// GET a JSON document, requiring a 2xx status
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::HttpStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(describe(&e)))
    }
}

impl Default for HttpNoteBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Error message including its source chain
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl NoteBackend for HttpNoteBackend {
    async fn save(&self, endpoint: &str, request: &SaveRequest) -> Result<SaveReply, BackendError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(describe(&e)))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::RequestFailed(describe(&e)))?;

        // Only non-JSON is a parse failure; field shapes are judged later
        let body: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| BackendError::ParseError(format!("invalid JSON response: {}", e)))?;
        let response = SaveResponse::from_body(&body);

        Ok(SaveReply { status, response })
    }

    async fn health(&self, endpoint: &str) -> Result<HealthStatus, BackendError> {
        let url = Self::service_url(endpoint, HEALTH_PATH)?;
        self.get_json(url).await
    }

    async fn list_notes(
        &self,
        endpoint: &str,
        category: Option<&str>,
    ) -> Result<Vec<Note>, BackendError> {
        let url = Self::notes_url(endpoint, category)?;
        let list: NoteList = self.get_json(url).await?;
        Ok(list.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_url_uses_origin() {
        let url = HttpNoteBackend::service_url("http://127.0.0.1:8787/api/save", HEALTH_PATH).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8787/health");
    }

    #[test]
    fn notes_url_with_category() {
        let url =
            HttpNoteBackend::notes_url("https://example.com/api/save", Some("research")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/notes?category=research");
    }

    #[test]
    fn notes_url_ignores_blank_category() {
        let url = HttpNoteBackend::notes_url("https://example.com/api/save", Some("  ")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/notes");
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let err = HttpNoteBackend::service_url("not a url", HEALTH_PATH).unwrap_err();
        assert!(matches!(err, BackendError::InvalidEndpoint { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
