//! Configuration domain module

mod app_config;

pub use app_config::{
    is_valid_config_key, AppConfig, LinuxConfig, DEFAULT_SELECTION_TOOL, VALID_CONFIG_KEYS,
    VALID_SELECTION_TOOLS,
};
