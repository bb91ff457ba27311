//! Domain layer - Core business logic
//!
//! Contains value objects, wire types, the dispatch state machine and
//! domain errors. This layer has no dependencies on external systems.

pub mod capture;
pub mod config;
pub mod endpoint;
pub mod error;

// Re-export common types
pub use capture::{
    DispatchSession, DispatchState, Note, SaveRequest, SaveResponse, SelectionEvent,
    SelectionKind, SelectionText,
};
pub use config::AppConfig;
pub use endpoint::{BACKEND_ENDPOINT_KEY, DEFAULT_ENDPOINT};
pub use error::*;
