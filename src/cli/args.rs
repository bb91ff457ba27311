//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::capture::SelectionKind;

/// Environment variable overriding the save endpoint
pub const ENDPOINT_ENV: &str = "SMART_BOOKMARKER_ENDPOINT";

/// SmartBookmarker - save selected text as categorized notes
#[derive(Parser, Debug)]
#[command(name = "smart-bookmarker")]
#[command(version)]
#[command(about = "Send selected text to a SmartBookmarker service")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to save (defaults to the current selection)
    #[arg(value_name = "TEXT", conflicts_with_all = ["stdin", "daemon"])]
    pub text: Option<String>,

    /// Read the text to save from stdin
    #[arg(long, conflicts_with = "daemon")]
    pub stdin: bool,

    /// Ask the service to file the note under this category
    #[arg(short = 'C', long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Save endpoint for this run
    #[arg(short = 'e', long, value_name = "URL", env = ENDPOINT_ENV, global = true)]
    pub endpoint: Option<String>,

    /// Selection to read when no text is given
    #[arg(short = 's', long, value_name = "SOURCE")]
    pub source: Option<SourceArg>,

    /// Report results in the terminal instead of desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Run as daemon (trigger via: smart-bookmarker daemon capture)
    #[arg(long)]
    pub daemon: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Send commands to running daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
    /// Register the capture action and create the config file
    Install,
    /// List notes stored by the service
    Notes {
        /// Only show notes in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Check that the service is reachable
    Health,
}

/// Daemon control actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum DaemonAction {
    /// Save the current selection
    Capture,
    /// Show daemon status
    Status,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
    /// Show the save endpoint, or store a new one
    Endpoint {
        /// New endpoint (blank restores the default)
        value: Option<String>,
    },
}

/// Selection source argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Primary,
    Clipboard,
}

impl From<SourceArg> for SelectionKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Primary => SelectionKind::Primary,
            SourceArg::Clipboard => SelectionKind::Clipboard,
        }
    }
}

/// Where the text of a one-shot capture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Given on the command line
    Argument(String),
    /// Piped on stdin
    Stdin,
    /// Read from the desktop selection
    Selection,
}

/// Parsed capture options (oneshot mode)
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub text: TextSource,
    pub category: Option<String>,
    pub selection: SelectionKind,
    pub selection_tool: String,
    pub notify: bool,
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub selection: SelectionKind,
    pub selection_tool: String,
    pub notify: bool,
}

impl Cli {
    /// Where the one-shot text comes from
    pub fn text_source(&self) -> TextSource {
        match (&self.text, self.stdin) {
            (Some(text), _) => TextSource::Argument(text.clone()),
            (None, true) => TextSource::Stdin,
            (None, false) => TextSource::Selection,
        }
    }
}
