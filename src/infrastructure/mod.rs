//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, integrating
//! with the note service, the desktop selection, notifications and the
//! config file.

pub mod backend;
pub mod config;
pub mod notification;
pub mod selection;

// Re-export adapters
pub use backend::HttpNoteBackend;
pub use config::{MemorySettingsStore, OverlaySettingsStore, XdgConfigStore};
pub use notification::{create_notifier, ConsoleNotifier, NotifyRustNotifier, NotifySendNotifier};
pub use selection::{create_selection_source, ArboardSelection, WaylandSelection};
