//! Selection infrastructure module
//!
//! Reads the user's selection via arboard (default) or wl-paste.

mod arboard;
mod wayland;

pub use self::arboard::ArboardSelection;
pub use wayland::WaylandSelection;

use crate::application::ports::SelectionSource;
use crate::domain::capture::SelectionKind;

/// Create the selection source for the configured tool
pub fn create_selection_source(kind: SelectionKind, tool: &str) -> Box<dyn SelectionSource> {
    match tool {
        "wl-paste" => Box::new(WaylandSelection::new(kind)),
        _ => Box::new(ArboardSelection::new(kind)),
    }
}
