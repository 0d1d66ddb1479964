//! CLI configuration loaded from `config.toml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "url-opener";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "patterns.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the pattern store lives. Defaults to the app config directory.
    pub store_path: Option<PathBuf>,
    /// Select the only pattern automatically when exactly one exists.
    pub auto_select_single: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            auto_select_single: true,
        }
    }
}

impl Config {
    /// Store path from the config, else the default location.
    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(default_store_path)
    }
}

pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE_NAME)
}

pub fn default_store_path() -> PathBuf {
    app_dir().join(STORE_FILE_NAME)
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str::<Config>(contents).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Load the config at `path` (or the default location). Missing files give
/// defaults silently; unreadable or malformed ones give defaults with a warning.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return Config::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, path.display());
            Config::default()
        }
    }
}
