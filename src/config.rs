// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences.
//!
//! Loading and saving of a `settings.toml` under the platform configuration
//! directory. Both surfaces read their defaults from here: the CLI falls back
//! to the configured map engine and marker limit when the flags are absent,
//! and the desktop form preselects the configured engine.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GeoImageMapper";

/// Fallback map engine selector when neither flag nor config provides one.
pub const DEFAULT_MAP_ENGINE: &str = "yandex";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Preferred map engine selector (`yandex`, `google`, `y`, `g`).
    pub map_engine: Option<String>,
    /// Maximum number of markers on a multi-point map.
    #[serde(default)]
    pub markers_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_engine: None,
            markers_limit: Some(crate::map_url::DEFAULT_MARKERS_LIMIT),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
