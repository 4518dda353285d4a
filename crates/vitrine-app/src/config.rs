//! Settings loading from the user config directory
//!
//! Settings live in `~/.config/vitrine/config.toml` (platform equivalent).
//! Loading is tolerant: a missing or unparseable file yields defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use vitrine_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const VITRINE_DIR: &str = "vitrine";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Product endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Product list endpoint
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Height of a product card in terminal rows, including its border
    #[serde(default = "default_card_height")]
    pub card_height: u16,

    /// Show the keybinding hints in the status bar
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            card_height: default_card_height(),
            show_hints: default_show_hints(),
        }
    }
}

fn default_api_url() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_card_height() -> u16 {
    8
}

fn default_show_hints() -> bool {
    true
}

/// Load settings from the user config directory.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    let base = dirs::config_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    load_settings_from(&base)
}

/// Load settings from `<config_base>/vitrine/config.toml`.
pub fn load_settings_from(config_base: &Path) -> Settings {
    let config_path = config_base.join(VITRINE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
