//! SmartBookmarker CLI entry point

use std::process::ExitCode;

use clap::Parser;

use smart_bookmarker::cli::{
    app::{load_merged_config, run_capture, run_health, run_install, run_notes},
    args::{Cli, Commands, DaemonAction},
    config_cmd::handle_config_command,
    presenter::Presenter,
    CaptureOptions, DaemonOptions, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use smart_bookmarker::domain::capture::SelectionKind;
use smart_bookmarker::domain::config::AppConfig;
use smart_bookmarker::domain::error::ConfigError;
use smart_bookmarker::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Command-line values shadow the config file
    let cli_config = AppConfig {
        backend_endpoint: cli.endpoint.clone().filter(|e| !e.trim().is_empty()),
        notify: if cli.no_notify { Some(false) } else { None },
        selection: cli.source.map(|s| SelectionKind::from(s).to_string()),
        linux: None,
    };
    let text = cli.text_source();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            return match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e @ ConfigError::ValidationError { .. }) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
        Some(Commands::Daemon { action }) => {
            return send_daemon_command(action, &presenter).await;
        }
        Some(Commands::Install) => return run_install(cli_config).await,
        Some(Commands::Notes { category }) => return run_notes(category, cli_config).await,
        Some(Commands::Health) => return run_health(cli_config).await,
        None => {}
    }

    let config = load_merged_config(cli_config.clone()).await;

    if cli.daemon {
        let options = DaemonOptions {
            selection: config.selection_or_default(),
            selection_tool: config.selection_tool_or_default().to_string(),
            notify: config.notify_or_default(),
        };

        start_daemon(options, cli_config, &presenter).await
    } else {
        let options = CaptureOptions {
            text,
            category: cli.category,
            selection: config.selection_or_default(),
            selection_tool: config.selection_tool_or_default().to_string(),
            notify: config.notify_or_default(),
        };

        run_capture(options, cli_config).await
    }
}

#[cfg(unix)]
async fn send_daemon_command(action: DaemonAction, presenter: &Presenter) -> ExitCode {
    match smart_bookmarker::cli::handle_daemon_command(action, presenter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(not(unix))]
async fn send_daemon_command(_action: DaemonAction, presenter: &Presenter) -> ExitCode {
    presenter.error("Daemon mode is only available on Unix");
    ExitCode::from(EXIT_USAGE_ERROR)
}

#[cfg(unix)]
async fn start_daemon(options: DaemonOptions, overrides: AppConfig, _presenter: &Presenter) -> ExitCode {
    smart_bookmarker::cli::run_daemon(options, overrides).await
}

#[cfg(not(unix))]
async fn start_daemon(_options: DaemonOptions, _overrides: AppConfig, presenter: &Presenter) -> ExitCode {
    presenter.error("Daemon mode is only available on Unix");
    ExitCode::from(EXIT_USAGE_ERROR)
}
