//! Capture domain module

mod note;
mod selection;
mod session;

pub use note::{HealthStatus, Note, NoteList, SaveRequest, SaveResponse, GENERIC_SAVE_FAILURE};
pub use selection::{SelectionEvent, SelectionKind, SelectionText, SAVE_SELECTION_ACTION_ID};
pub use session::{DispatchSession, DispatchState, InvalidStateTransition};
