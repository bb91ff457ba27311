//! Main app runners for one-shot mode and the service commands

use std::process::ExitCode;
use std::time::Duration;

use tokio::io::AsyncReadExt;

use crate::application::ports::{ConfigStore, NoteBackend, Notifier, SelectionSource};
use crate::application::{
    CaptureCallbacks, CaptureDispatcher, CaptureHooks, CaptureInput, DispatchOutcome,
    EndpointResolver,
};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{
    create_notifier, create_selection_source, HttpNoteBackend, OverlaySettingsStore,
    XdgConfigStore,
};

use super::args::{CaptureOptions, TextSource};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Settings as seen by the pipeline: command-line overrides over the config file
pub type AppSettings = OverlaySettingsStore<XdgConfigStore>;

/// Capture hooks wired to the production adapters
pub type AppHooks = CaptureHooks<AppSettings, HttpNoteBackend, Box<dyn Notifier>>;

/// Settings store with `overrides` shadowing the config file
pub fn app_settings(overrides: AppConfig) -> AppSettings {
    OverlaySettingsStore::new(XdgConfigStore::new(), overrides)
}

/// Wire the capture pipeline
pub fn build_hooks(overrides: AppConfig, notify: bool) -> AppHooks {
    let dispatcher = CaptureDispatcher::new(
        app_settings(overrides),
        HttpNoteBackend::new(),
        create_notifier(notify),
    );
    CaptureHooks::new(dispatcher)
}

/// Run one capture
pub async fn run_capture(options: CaptureOptions, overrides: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let text = match read_text(&options).await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let hooks = build_hooks(overrides, options.notify);

    let spinner = presenter.spinner();
    let start = spinner.clone();
    let callbacks = CaptureCallbacks {
        on_submit_start: Some(Box::new(move |endpoint: &str| {
            start.set_message(format!("Saving to {}...", endpoint));
            start.enable_steady_tick(Duration::from_millis(80));
        })),
        on_submit_end: Some(Box::new(move || spinner.finish_and_clear())),
    };

    let input = CaptureInput {
        text,
        category: options.category,
    };

    match hooks.dispatcher().execute(input, callbacks).await {
        DispatchOutcome::Skipped => ExitCode::from(EXIT_SUCCESS),
        DispatchOutcome::Saved(note) => {
            presenter.note(&note);
            ExitCode::from(EXIT_SUCCESS)
        }
        DispatchOutcome::Failed(failure) => {
            // Console notifications already printed the failure
            if options.notify {
                presenter.error(&format!("Failed to save selection: {}", failure));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Get the text to capture for this run
async fn read_text(options: &CaptureOptions) -> Result<String, String> {
    match &options.text {
        TextSource::Argument(text) => Ok(text.clone()),
        TextSource::Stdin => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(text)
        }
        TextSource::Selection => create_selection_source(options.selection, &options.selection_tool)
            .read()
            .await
            .map_err(|e| e.to_string()),
    }
}

/// Register the capture action and make sure a config file exists
pub async fn run_install(overrides: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let hooks = build_hooks(overrides, false);
    let action = hooks.on_install();

    presenter.success(&format!("Registered action '{}' ({})", action.title, action.id));
    presenter.info(&format!("Contexts: {}", action.contexts.join(", ")));

    let store = XdgConfigStore::new();
    match store.init().await {
        Ok(()) => presenter.success(&format!(
            "Config file created at: {}",
            store.path().display()
        )),
        Err(ConfigError::AlreadyExists(path)) => {
            presenter.info(&format!("Using existing config at: {}", path))
        }
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    }

    presenter.info("Bind a hotkey to 'smart-bookmarker' or 'smart-bookmarker daemon capture'");
    presenter.info(&format!(
        "Endpoint: {}",
        hooks.dispatcher().resolver().resolve().await
    ));
    ExitCode::from(EXIT_SUCCESS)
}

/// List notes stored by the service
pub async fn run_notes(category: Option<String>, overrides: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let endpoint = EndpointResolver::new(app_settings(overrides)).resolve().await;

    match HttpNoteBackend::new()
        .list_notes(&endpoint, category.as_deref())
        .await
    {
        Ok(notes) if notes.is_empty() => {
            presenter.info("No notes yet");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(notes) => {
            for note in &notes {
                presenter.note(note);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to list notes: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Check that the service answers its health probe
pub async fn run_health(overrides: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let endpoint = EndpointResolver::new(app_settings(overrides)).resolve().await;

    match HttpNoteBackend::new().health(&endpoint).await {
        Ok(status) if status.ok => {
            presenter.success(&format!(
                "{} is up ({})",
                status.service.as_deref().unwrap_or("service"),
                endpoint
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(_) => {
            presenter.error(&format!("Service at {} reported not ok", endpoint));
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&format!("Service unreachable at {}: {}", endpoint, e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        AppConfig::empty()
    });

    // Merge: defaults < file < cli (env is folded into cli by clap)
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
