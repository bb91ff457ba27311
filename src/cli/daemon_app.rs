//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::SelectionSource;
use crate::application::DispatchOutcome;
use crate::domain::capture::SelectionEvent;
use crate::domain::config::AppConfig;
use crate::infrastructure::create_selection_source;

use super::app::{build_hooks, AppHooks, EXIT_ERROR, EXIT_SUCCESS};
use super::args::DaemonOptions;
use super::ipc::create_ipc_server;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{DaemonSignal, DaemonSignalHandler};

/// Run daemon mode
pub async fn run_daemon(options: DaemonOptions, overrides: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => presenter.error(&e.to_string()),
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let hooks = Arc::new(build_hooks(overrides, options.notify));
    let selection = create_selection_source(options.selection, &options.selection_tool);

    // Returns handler + sender for the socket server
    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let socket_path = server.path();

    let hooks_for_socket = Arc::clone(&hooks);
    tokio::spawn(async move {
        let state_fn = Box::new(move || hooks_for_socket.dispatcher().state());
        if let Err(e) = server.run(signal_tx, state_fn).await {
            eprintln!("Socket server stopped: {}", e);
        }
    });

    let action = hooks.on_install();
    presenter.daemon_status("Started, waiting for captures...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | Action: {} | SIGINT: exit",
        std::process::id(),
        socket_path,
        action.id
    ));

    let result = daemon_loop(&hooks, selection.as_ref(), &mut signals, &presenter).await;

    let _ = pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Process captures one at a time until shutdown
async fn daemon_loop(
    hooks: &AppHooks,
    selection: &dyn SelectionSource,
    signals: &mut DaemonSignalHandler,
    presenter: &Presenter,
) -> bool {
    loop {
        match signals.recv().await {
            Some(DaemonSignal::Capture) => {
                let text = match selection.read().await {
                    Ok(text) => text,
                    Err(e) => {
                        presenter.error(&format!("Failed to read selection: {}", e));
                        continue;
                    }
                };

                let event = SelectionEvent::save_selection(text);
                match hooks.on_action(&event).await {
                    DispatchOutcome::Skipped => presenter.info("Empty selection, nothing saved"),
                    DispatchOutcome::Saved(note) => {
                        presenter.success(&format!("Saved to {}", note.category));
                    }
                    DispatchOutcome::Failed(failure) => {
                        presenter.error(&format!("Failed to save selection: {}", failure));
                    }
                }
                presenter.daemon_status("Idle");
            }
            Some(DaemonSignal::Shutdown) => {
                presenter.daemon_status("Shutting down...");
                return true;
            }
            // Channel closed
            None => return false,
        }
    }
}
