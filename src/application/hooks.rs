//! Host lifecycle entry points
//!
//! Host adapters (the CLI, the daemon) call these instead of wiring the
//! dispatcher directly, so the core never touches host registration APIs.

use crate::domain::capture::{SelectionEvent, SAVE_SELECTION_ACTION_ID};

use super::capture::{CaptureDispatcher, DispatchOutcome};
use super::ports::{NoteBackend, Notifier, SettingsStore};

/// A capture action the host should offer to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureAction {
    pub id: &'static str,
    pub title: &'static str,
    /// Host contexts the action appears in
    pub contexts: &'static [&'static str],
}

/// The single action this application registers
pub const SAVE_SELECTION_ACTION: CaptureAction = CaptureAction {
    id: SAVE_SELECTION_ACTION_ID,
    title: "Send selected text to SmartBookmarker",
    contexts: &["selection"],
};

/// Event-subscription surface for host adapters
pub struct CaptureHooks<S, B, N>
where
    S: SettingsStore,
    B: NoteBackend,
    N: Notifier,
{
    dispatcher: CaptureDispatcher<S, B, N>,
}

impl<S, B, N> CaptureHooks<S, B, N>
where
    S: SettingsStore,
    B: NoteBackend,
    N: Notifier,
{
    pub fn new(dispatcher: CaptureDispatcher<S, B, N>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &CaptureDispatcher<S, B, N> {
        &self.dispatcher
    }

    /// Installation hook: the action the host must register
    pub fn on_install(&self) -> CaptureAction {
        SAVE_SELECTION_ACTION
    }

    /// Capture hook: dispatch the selected text
    pub async fn on_capture(&self, text: &str) -> DispatchOutcome {
        self.dispatcher.dispatch(text).await
    }

    /// Route a host event; events for other actions are ignored
    pub async fn on_action(&self, event: &SelectionEvent) -> DispatchOutcome {
        if event.action_id != SAVE_SELECTION_ACTION.id {
            return DispatchOutcome::Skipped;
        }
        self.on_capture(event.text()).await
    }
}
