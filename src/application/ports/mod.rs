//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod backend;
pub mod config;
pub mod notifier;
pub mod selection;

// Re-export common types
pub use backend::{BackendError, NoteBackend, SaveReply};
pub use config::{ConfigStore, SettingsStore};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use selection::{SelectionError, SelectionSource};
