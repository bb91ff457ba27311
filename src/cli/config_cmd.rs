//! Config command handler

use crate::application::ports::{ConfigStore, SettingsStore};
use crate::application::ConfigurationEditor;
use crate::domain::config::{is_valid_config_key, VALID_CONFIG_KEYS};
use crate::domain::endpoint::BACKEND_ENDPOINT_KEY;
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore + SettingsStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
        ConfigAction::Endpoint { value } => handle_endpoint(store, presenter, value).await,
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore + SettingsStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::unknown_key(key, VALID_CONFIG_KEYS));
    }

    // The endpoint goes through the editor so it is trimmed and defaulted
    if key == BACKEND_ENDPOINT_KEY {
        return handle_endpoint(store, presenter, Some(value.to_string())).await;
    }

    SettingsStore::set(store, key, value).await?;
    let stored = SettingsStore::get(store, key).await?;
    presenter.success(&format!(
        "{} = {}",
        key,
        stored.as_deref().unwrap_or(value)
    ));
    Ok(())
}

async fn handle_get<S: SettingsStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::unknown_key(key, VALID_CONFIG_KEYS));
    }

    match store.get(key).await? {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config.value_of(key)?;
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Show the effective endpoint, or save a new one
async fn handle_endpoint<S: SettingsStore>(
    store: &S,
    presenter: &Presenter,
    value: Option<String>,
) -> Result<(), ConfigError> {
    let editor = ConfigurationEditor::new(store);

    match value {
        None => presenter.output(&editor.open().await),
        Some(value) => {
            let confirmation = editor.save(&value).await?;
            presenter.key_value(BACKEND_ENDPOINT_KEY, &confirmation.saved);
            presenter
                .transient(&confirmation.message, confirmation.clear_after)
                .await;
        }
    }
    Ok(())
}
