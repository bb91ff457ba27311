//! SmartBookmarker - send selected text to a note service
//!
//! This crate captures the user's current text selection and submits it to
//! a SmartBookmarker HTTP service, which files it as a categorized note.
//! The outcome is reported through a desktop notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Selection text, wire types, the dispatch state machine and errors
//! - **Application**: Endpoint resolution, capture dispatch, the endpoint editor
//!   and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP, selection, notifications, config)
//! - **CLI**: Command-line interface, argument parsing, daemon and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
