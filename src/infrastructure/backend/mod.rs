//! Note service adapters

mod http;

pub use http::HttpNoteBackend;
