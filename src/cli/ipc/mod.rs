//! IPC module for daemon control over a Unix domain socket

mod unix_socket;

pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use tokio::sync::mpsc;

use super::signals::DaemonSignal;
use crate::domain::capture::DispatchState;

/// Command asking the daemon to save the current selection
pub const CAPTURE_COMMAND: &str = "capture";

/// Command asking the daemon for its dispatch state
pub const STATUS_COMMAND: &str = "status";

/// State function type for IPC servers
pub type StateFn = Box<dyn Fn() -> DispatchState + Send + Sync>;

/// Trait for IPC servers that listen for daemon commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept connections forever, forwarding commands to `tx`.
    ///
    /// `state_fn` answers status queries.
    async fn run(&self, tx: mpsc::Sender<DaemonSignal>, state_fn: StateFn) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Send a command and receive response
    async fn send_command(&self, cmd: &str) -> io::Result<String>;
}

/// Create the IPC server
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

/// Create the IPC client
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}
