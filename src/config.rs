//! Application configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides. The file lives at `<config dir>/the_lab/config.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    pub target_fps: u32,
    /// Directory holding save files, created on startup if absent
    pub save_dir: PathBuf,
    /// Extension appended to save names (without the dot)
    pub save_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: 800,
            window_height: 600,
            window_title: "The Lab".to_string(),
            target_fps: 60,
            save_dir: PathBuf::from("saves"),
            save_extension: "tlab".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("the_lab").join("config.json"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Config::default(),
        }
    }

    /// Load `path` if it exists; a malformed file is reported and ignored
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}
