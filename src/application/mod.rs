//! Application layer - Use cases and port interfaces
//!
//! Contains the capture pipeline, endpoint resolution, the endpoint editor
//! and trait definitions for external system interactions.

pub mod capture;
pub mod editor;
pub mod hooks;
pub mod ports;
pub mod resolve_endpoint;

// Re-export use cases
pub use capture::{
    CaptureCallbacks, CaptureDispatcher, CaptureFailure, CaptureInput, DispatchOutcome,
    NOTIFICATION_TITLE,
};
pub use editor::{Confirmation, ConfigurationEditor, CONFIRMATION_DURATION};
pub use hooks::{CaptureAction, CaptureHooks, SAVE_SELECTION_ACTION};
pub use resolve_endpoint::EndpointResolver;
