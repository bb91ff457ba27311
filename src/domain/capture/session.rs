//! Dispatch session state machine

use std::fmt;
use thiserror::Error;

/// Dispatch states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    TextCaptured,
    EndpointResolved,
    Submitting,
    Succeeded,
    Failed,
}

impl DispatchState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TextCaptured => "text-captured",
            Self::EndpointResolved => "endpoint-resolved",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Whether a dispatch is between capture and its terminal state
    pub const fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: DispatchState,
    pub action: String,
}

/// Per-dispatch state tracker.
///
/// State machine:
///   IDLE -> TEXT_CAPTURED (capture_text)
///   TEXT_CAPTURED -> ENDPOINT_RESOLVED (endpoint_resolved)
///   ENDPOINT_RESOLVED -> SUBMITTING (start_submit)
///   SUBMITTING -> SUCCEEDED | FAILED (succeed / fail)
///   SUCCEEDED | FAILED -> IDLE (finish)
#[derive(Debug, Default)]
pub struct DispatchSession {
    state: DispatchState,
}

impl DispatchSession {
    pub fn new() -> Self {
        Self {
            state: DispatchState::Idle,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DispatchState::Idle
    }

    fn transition(
        &mut self,
        from: &[DispatchState],
        to: DispatchState,
        action: &str,
    ) -> Result<(), InvalidStateTransition> {
        if !from.contains(&self.state) {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: action.to_string(),
            });
        }
        self.state = to;
        Ok(())
    }

    pub fn capture_text(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::Idle],
            DispatchState::TextCaptured,
            "capture text",
        )
    }

    pub fn endpoint_resolved(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::TextCaptured],
            DispatchState::EndpointResolved,
            "resolve endpoint",
        )
    }

    pub fn start_submit(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::EndpointResolved],
            DispatchState::Submitting,
            "submit",
        )
    }

    pub fn succeed(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::Submitting],
            DispatchState::Succeeded,
            "complete successfully",
        )
    }

    pub fn fail(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::Submitting],
            DispatchState::Failed,
            "fail",
        )
    }

    /// Return to idle after a terminal state
    pub fn finish(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(
            &[DispatchState::Succeeded, DispatchState::Failed],
            DispatchState::Idle,
            "finish",
        )
    }

    /// Force the session back to idle, whatever state it is in
    pub fn reset(&mut self) {
        self.state = DispatchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = DispatchSession::new();
        assert!(session.is_idle());
        assert!(!session.state().is_busy());
    }

    #[test]
    fn full_success_cycle() {
        let mut session = DispatchSession::new();
        session.capture_text().unwrap();
        assert_eq!(session.state(), DispatchState::TextCaptured);
        session.endpoint_resolved().unwrap();
        assert_eq!(session.state(), DispatchState::EndpointResolved);
        session.start_submit().unwrap();
        assert_eq!(session.state(), DispatchState::Submitting);
        session.succeed().unwrap();
        assert_eq!(session.state(), DispatchState::Succeeded);
        session.finish().unwrap();
        assert!(session.is_idle());
    }

    #[test]
    fn failure_cycle() {
        let mut session = DispatchSession::new();
        session.capture_text().unwrap();
        session.endpoint_resolved().unwrap();
        session.start_submit().unwrap();
        session.fail().unwrap();
        assert_eq!(session.state(), DispatchState::Failed);
        session.finish().unwrap();
        assert!(session.is_idle());
    }

    #[test]
    fn cannot_capture_while_busy() {
        let mut session = DispatchSession::new();
        session.capture_text().unwrap();
        let err = session.capture_text().unwrap_err();
        assert_eq!(err.current_state, DispatchState::TextCaptured);
        assert!(err.to_string().contains("capture text"));
    }

    #[test]
    fn cannot_submit_before_endpoint() {
        let mut session = DispatchSession::new();
        session.capture_text().unwrap();
        assert!(session.start_submit().is_err());
    }

    #[test]
    fn cannot_finish_from_idle() {
        let mut session = DispatchSession::new();
        assert!(session.finish().is_err());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut session = DispatchSession::new();
        session.capture_text().unwrap();
        session.reset();
        assert!(session.is_idle());
    }

    #[test]
    fn state_display() {
        assert_eq!(DispatchState::Submitting.to_string(), "submitting");
        assert_eq!(DispatchState::Idle.to_string(), "idle");
    }
}
