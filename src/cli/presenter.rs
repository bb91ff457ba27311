//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::capture::Note;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Create a styled spinner that is not ticking yet.
    ///
    /// The returned bar is cheap to clone and can be driven from callbacks.
    pub fn spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner
    }

    /// Show a message that clears itself after `clear_after`.
    ///
    /// Falls back to a plain success line when stderr is not a terminal.
    pub async fn transient(&self, message: &str, clear_after: Duration) {
        let bar = ProgressBar::new_spinner();
        if bar.is_hidden() {
            self.success(message);
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            bar.set_style(style);
        }
        bar.set_message(format!("{} {}", "✓".green(), message));
        bar.tick();
        tokio::time::sleep(clear_after).await;
        bar.finish_and_clear();
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print daemon status
    pub fn daemon_status(&self, state: &str) {
        eprintln!("{} Daemon: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a saved note to stdout
    pub fn note(&self, note: &Note) {
        self.output(&Self::format_note(note));
    }

    /// One-line note summary: `[category] headline (created_at)`
    pub fn format_note(note: &Note) -> String {
        let mut line = format!("[{}] {}", note.category, note.headline_or_untitled());
        if let Some(ref created_at) = note.created_at {
            line.push_str(&format!(" ({})", created_at));
        }
        line
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
