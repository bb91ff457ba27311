//! Capture-and-submit use case

use std::sync::Mutex as StdMutex;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::capture::{
    DispatchSession, DispatchState, InvalidStateTransition, Note, SaveRequest, SelectionText,
};

use super::ports::{BackendError, NoteBackend, NotificationIcon, Notifier, SettingsStore};
use super::resolve_endpoint::EndpointResolver;

/// Title of every capture notification
pub const NOTIFICATION_TITLE: &str = "SmartBookmarker";

/// Why a non-empty capture did not produce a note.
///
/// The display string is the human-readable reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureFailure {
    /// Request could not be sent or the response could not be read
    #[error("{0}")]
    Network(String),

    /// Service answered with a non-2xx status or `ok: false`
    #[error("{0}")]
    Rejected(String),

    /// Response body was not a usable save response
    #[error("{0}")]
    Malformed(String),
}

/// Result of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Selection was empty; nothing was sent or shown
    Skipped,
    /// Service saved the note
    Saved(Note),
    /// Capture failed; the user was told why
    Failed(CaptureFailure),
}

impl DispatchOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Input parameters for one capture
#[derive(Debug, Clone, Default)]
pub struct CaptureInput {
    /// Raw selection text, untrimmed
    pub text: String,
    /// Optional category override sent to the service
    pub category: Option<String>,
}

impl CaptureInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct CaptureCallbacks {
    /// Called with the endpoint right before the request is sent
    pub on_submit_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called once the request has settled, before notifying
    pub on_submit_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Capture dispatcher.
///
/// Dispatches are serialized: a second capture waits until the one in
/// flight has emitted its notification.
pub struct CaptureDispatcher<S, B, N>
where
    S: SettingsStore,
    B: NoteBackend,
    N: Notifier,
{
    resolver: EndpointResolver<S>,
    backend: B,
    notifier: N,
    session: StdMutex<DispatchSession>,
    gate: Mutex<()>,
}

impl<S, B, N> CaptureDispatcher<S, B, N>
where
    S: SettingsStore,
    B: NoteBackend,
    N: Notifier,
{
    pub fn new(store: S, backend: B, notifier: N) -> Self {
        Self {
            resolver: EndpointResolver::new(store),
            backend,
            notifier,
            session: StdMutex::new(DispatchSession::new()),
            gate: Mutex::new(()),
        }
    }

    /// Current dispatch state
    pub fn state(&self) -> DispatchState {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .state()
    }

    /// The endpoint resolver used by this dispatcher
    pub fn resolver(&self) -> &EndpointResolver<S> {
        &self.resolver
    }

    /// Capture `selection_text` with no category override
    pub async fn dispatch(&self, selection_text: &str) -> DispatchOutcome {
        self.execute(CaptureInput::new(selection_text), CaptureCallbacks::default())
            .await
    }

    /// Run one capture.
    ///
    /// Emits exactly one notification for non-empty text and none for
    /// empty text. Never returns an error; failures are reported to the
    /// user and returned as [`DispatchOutcome::Failed`].
    pub async fn execute(&self, input: CaptureInput, callbacks: CaptureCallbacks) -> DispatchOutcome {
        let Some(text) = SelectionText::capture(&input.text) else {
            return DispatchOutcome::Skipped;
        };

        let _turn = self.gate.lock().await;
        self.advance(DispatchSession::capture_text);

        let endpoint = self.resolver.resolve().await;
        self.advance(DispatchSession::endpoint_resolved);

        let request = SaveRequest::new(text).with_category(input.category);
        self.advance(DispatchSession::start_submit);
        if let Some(ref cb) = callbacks.on_submit_start {
            cb(&endpoint);
        }

        let result = self.submit(&endpoint, &request).await;

        if let Some(ref cb) = callbacks.on_submit_end {
            cb();
        }

        let outcome = match result {
            Ok(note) => {
                self.advance(DispatchSession::succeed);
                self.report(&format!("Saved to {}", note.category), NotificationIcon::Success)
                    .await;
                DispatchOutcome::Saved(note)
            }
            Err(failure) => {
                self.advance(DispatchSession::fail);
                self.report(
                    &format!("Failed to save selection: {}", failure),
                    NotificationIcon::Error,
                )
                .await;
                DispatchOutcome::Failed(failure)
            }
        };

        self.advance(DispatchSession::finish);
        outcome
    }

    /// Send the request and classify the reply
    async fn submit(&self, endpoint: &str, request: &SaveRequest) -> Result<Note, CaptureFailure> {
        let reply = self
            .backend
            .save(endpoint, request)
            .await
            .map_err(|e| match e {
                BackendError::ParseError(message) => CaptureFailure::Malformed(message),
                other => CaptureFailure::Network(other.to_string()),
            })?;

        if !reply.is_http_success() || !reply.response.ok {
            return Err(CaptureFailure::Rejected(
                reply.response.error_or_generic().to_string(),
            ));
        }

        match reply.response.decode_note() {
            Ok(Some(note)) => Ok(note),
            Ok(None) => Err(CaptureFailure::Malformed(
                "response is missing the saved note".to_string(),
            )),
            Err(e) => Err(CaptureFailure::Malformed(format!("invalid note in response: {}", e))),
        }
    }

    /// Emit the single terminal notification (non-fatal)
    async fn report(&self, message: &str, icon: NotificationIcon) {
        if let Err(e) = self.notifier.notify(NOTIFICATION_TITLE, message, icon).await {
            eprintln!("Warning: notification failed: {}", e);
        }
    }

    fn advance(&self, step: fn(&mut DispatchSession) -> Result<(), InvalidStateTransition>) {
        let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = step(&mut session) {
            eprintln!("Warning: {}", e);
            session.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NotificationError, SaveReply};
    use crate::domain::capture::{HealthStatus, SaveResponse};
    use crate::domain::endpoint::{BACKEND_ENDPOINT_KEY, DEFAULT_ENDPOINT};
    use crate::infrastructure::config::MemorySettingsStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    // Mock implementations for testing
    #[derive(Clone)]
    enum Reply {
        Ok(u16, SaveResponse),
        Err(BackendError),
    }

    #[derive(Clone)]
    struct MockBackend {
        reply: Reply,
        calls: Arc<StdMutex<Vec<(String, SaveRequest)>>>,
    }

    impl MockBackend {
        fn replying(status: u16, response: SaveResponse) -> Self {
            Self {
                reply: Reply::Ok(status, response),
                calls: Arc::default(),
            }
        }

        fn failing(error: BackendError) -> Self {
            Self {
                reply: Reply::Err(error),
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> Vec<(String, SaveRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NoteBackend for MockBackend {
        async fn save(
            &self,
            endpoint: &str,
            request: &SaveRequest,
        ) -> Result<SaveReply, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), request.clone()));
            match &self.reply {
                Reply::Ok(status, response) => Ok(SaveReply {
                    status: *status,
                    response: response.clone(),
                }),
                Reply::Err(e) => Err(e.clone()),
            }
        }

        async fn health(&self, _endpoint: &str) -> Result<HealthStatus, BackendError> {
            Ok(HealthStatus::default())
        }

        async fn list_notes(
            &self,
            _endpoint: &str,
            _category: Option<&str>,
        ) -> Result<Vec<Note>, BackendError> {
            Ok(Vec::new())
        }
    }

    #[derive(Clone, Default)]
    struct MockNotifier {
        sent: Arc<StdMutex<Vec<(String, String, NotificationIcon)>>>,
        fail: bool,
    }

    impl MockNotifier {
        fn sent(&self) -> Vec<(String, String, NotificationIcon)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(
            &self,
            title: &str,
            message: &str,
            icon: NotificationIcon,
        ) -> Result<(), NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string(), icon));
            if self.fail {
                return Err(NotificationError::SendFailed("no bus".to_string()));
            }
            Ok(())
        }
    }

    fn saved(category: &str) -> SaveResponse {
        SaveResponse::from_body(&json!({ "ok": true, "note": { "category": category } }))
    }

    #[tokio::test]
    async fn success_sends_trimmed_text_and_notifies_category() {
        let backend = MockBackend::replying(200, saved("misc"));
        let notifier = MockNotifier::default();
        let dispatcher =
            CaptureDispatcher::new(MemorySettingsStore::new(), backend.clone(), notifier.clone());

        let outcome = dispatcher.dispatch("  hello world  ").await;

        assert!(outcome.is_saved());
        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, DEFAULT_ENDPOINT);
        assert_eq!(calls[0].1.text, "hello world");
        assert!(calls[0].1.category.is_none());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, NOTIFICATION_TITLE);
        assert!(sent[0].1.contains("misc"));
        assert_eq!(sent[0].2, NotificationIcon::Success);
        assert_eq!(dispatcher.state(), DispatchState::Idle);
    }

    #[tokio::test]
    async fn empty_selection_is_silent() {
        let backend = MockBackend::replying(200, saved("misc"));
        let notifier = MockNotifier::default();
        let dispatcher =
            CaptureDispatcher::new(MemorySettingsStore::new(), backend.clone(), notifier.clone());

        for text in ["", "   ", "\n\t"] {
            assert!(dispatcher.dispatch(text).await.is_skipped());
        }

        assert!(backend.calls().is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn server_error_message_is_reported() {
        let response = SaveResponse::from_body(&json!({ "ok": false, "error": "disk_full" }));
        let notifier = MockNotifier::default();
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(500, response),
            notifier.clone(),
        );

        let outcome = dispatcher.dispatch("x").await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed(CaptureFailure::Rejected("disk_full".to_string()))
        );
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("disk_full"));
        assert_eq!(sent[0].2, NotificationIcon::Error);
    }

    #[tokio::test]
    async fn ok_false_without_error_uses_generic_marker() {
        let response = SaveResponse::from_body(&json!({ "ok": false }));
        let notifier = MockNotifier::default();
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(200, response),
            notifier.clone(),
        );

        let outcome = dispatcher.dispatch("x").await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed(CaptureFailure::Rejected("save_failed".to_string()))
        );
        assert!(notifier.sent()[0].1.contains("save_failed"));
    }

    #[tokio::test]
    async fn non_2xx_with_ok_true_is_still_a_failure() {
        let notifier = MockNotifier::default();
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(503, saved("misc")),
            notifier.clone(),
        );

        assert!(dispatcher.dispatch("x").await.is_failed());
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn ok_without_note_is_malformed() {
        let response = SaveResponse::from_body(&json!({ "ok": true }));
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(200, response),
            MockNotifier::default(),
        );

        assert!(matches!(
            dispatcher.dispatch("x").await,
            DispatchOutcome::Failed(CaptureFailure::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn failure_reply_with_odd_note_keeps_server_error() {
        let response = SaveResponse::from_body(&json!({
            "ok": false,
            "error": "disk_full",
            "note": "n/a"
        }));
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(500, response),
            MockNotifier::default(),
        );

        assert_eq!(
            dispatcher.dispatch("x").await,
            DispatchOutcome::Failed(CaptureFailure::Rejected("disk_full".to_string()))
        );
    }

    #[tokio::test]
    async fn ok_with_invalid_note_is_malformed() {
        let response = SaveResponse::from_body(&json!({ "ok": true, "note": { "headline": "x" } }));
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(200, response),
            MockNotifier::default(),
        );

        assert!(matches!(
            dispatcher.dispatch("x").await,
            DispatchOutcome::Failed(CaptureFailure::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn transport_error_is_stringified() {
        let notifier = MockNotifier::default();
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::failing(BackendError::RequestFailed("connection refused".to_string())),
            notifier.clone(),
        );

        let outcome = dispatcher.dispatch("x").await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed(CaptureFailure::Network("connection refused".to_string()))
        );
        assert!(notifier.sent()[0].1.contains("connection refused"));
        assert_eq!(dispatcher.state(), DispatchState::Idle);
    }

    #[tokio::test]
    async fn parse_error_is_malformed() {
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::failing(BackendError::ParseError("expected value".to_string())),
            MockNotifier::default(),
        );

        assert_eq!(
            dispatcher.dispatch("x").await,
            DispatchOutcome::Failed(CaptureFailure::Malformed("expected value".to_string()))
        );
    }

    #[tokio::test]
    async fn configured_endpoint_is_used() {
        let backend = MockBackend::replying(200, saved("misc"));
        let store = MemorySettingsStore::with_entry(BACKEND_ENDPOINT_KEY, "https://example.com/save");
        let dispatcher = CaptureDispatcher::new(store, backend.clone(), MockNotifier::default());

        dispatcher.dispatch("x").await;

        assert_eq!(backend.calls()[0].0, "https://example.com/save");
    }

    #[tokio::test]
    async fn category_override_is_forwarded() {
        let backend = MockBackend::replying(200, saved("research"));
        let dispatcher =
            CaptureDispatcher::new(MemorySettingsStore::new(), backend.clone(), MockNotifier::default());

        let input = CaptureInput {
            text: "paper".to_string(),
            category: Some("research".to_string()),
        };
        dispatcher.execute(input, CaptureCallbacks::default()).await;

        assert_eq!(backend.calls()[0].1.category.as_deref(), Some("research"));
    }

    #[tokio::test]
    async fn notifier_failure_does_not_change_outcome() {
        let notifier = MockNotifier {
            fail: true,
            ..Default::default()
        };
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(200, saved("misc")),
            notifier.clone(),
        );

        assert!(dispatcher.dispatch("x").await.is_saved());
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn callbacks_fire_around_submit() {
        let seen = Arc::new(StdMutex::new(Vec::<String>::new()));
        let start = Arc::clone(&seen);
        let end = Arc::clone(&seen);
        let callbacks = CaptureCallbacks {
            on_submit_start: Some(Box::new(move |endpoint: &str| {
                start.lock().unwrap().push(format!("start {}", endpoint));
            })),
            on_submit_end: Some(Box::new(move || {
                end.lock().unwrap().push("end".to_string());
            })),
        };
        let dispatcher = CaptureDispatcher::new(
            MemorySettingsStore::new(),
            MockBackend::replying(200, saved("misc")),
            MockNotifier::default(),
        );

        dispatcher.execute(CaptureInput::new("x"), callbacks).await;

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, vec![format!("start {}", DEFAULT_ENDPOINT), "end".to_string()]);
    }

    #[tokio::test]
    async fn concurrent_dispatches_each_notify_once() {
        let backend = MockBackend::replying(200, saved("misc"));
        let notifier = MockNotifier::default();
        let dispatcher = Arc::new(CaptureDispatcher::new(
            MemorySettingsStore::new(),
            backend.clone(),
            notifier.clone(),
        ));

        let a = {
            let d = Arc::clone(&dispatcher);
            tokio::spawn(async move { d.dispatch("first").await })
        };
        let b = {
            let d = Arc::clone(&dispatcher);
            tokio::spawn(async move { d.dispatch("second").await })
        };

        assert!(a.await.unwrap().is_saved());
        assert!(b.await.unwrap().is_saved());
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(notifier.sent().len(), 2);
        assert_eq!(dispatcher.state(), DispatchState::Idle);
    }
}
