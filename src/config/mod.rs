// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! host-product preferences to a `feedback.toml` file.
//!
//! All fields are optional in the file; missing or out-of-range values fall
//! back to the constants in [`defaults`]. The accessor methods
//! ([`Config::auto_hide`], [`Config::debounce_window`]) return clamped,
//! ready-to-use [`Duration`] values.
//!
//! # Examples
//!
//! ```no_run
//! use feedback_engine::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Cap the number of simultaneously visible notifications
//! config.max_visible = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::{
    DEFAULT_AUTO_HIDE_MS, DEFAULT_DEBOUNCE_WINDOW_MS, MAX_AUTO_HIDE_MS, MAX_DEBOUNCE_WINDOW_MS,
    MIN_AUTO_HIDE_MS,
};

const CONFIG_FILE: &str = "feedback.toml";
const APP_NAME: &str = "FeedbackEngine";

/// Engine configuration.
///
/// `max_visible = None` (the default) means the notification queue is
/// unbounded: every enqueued notification becomes visible immediately.
/// Setting it holds overflow notifications back in a pending queue until a
/// visible slot frees up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Auto-hide duration applied when a notification doesn't specify one.
    #[serde(default)]
    pub default_auto_hide_ms: Option<u64>,
    /// Quiescence window applied when an input binding doesn't specify one.
    #[serde(default)]
    pub debounce_window_ms: Option<u64>,
    /// Optional cap on simultaneously visible notifications.
    #[serde(default)]
    pub max_visible: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_auto_hide_ms: Some(DEFAULT_AUTO_HIDE_MS),
            debounce_window_ms: Some(DEFAULT_DEBOUNCE_WINDOW_MS),
            max_visible: None,
        }
    }
}

impl Config {
    /// Returns the default auto-hide duration, clamped to the valid range.
    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        let ms = self
            .default_auto_hide_ms
            .unwrap_or(DEFAULT_AUTO_HIDE_MS)
            .clamp(MIN_AUTO_HIDE_MS, MAX_AUTO_HIDE_MS);
        Duration::from_millis(ms)
    }

    /// Returns the default debounce window, clamped to the valid range.
    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        let ms = self
            .debounce_window_ms
            .unwrap_or(DEFAULT_DEBOUNCE_WINDOW_MS)
            .min(MAX_DEBOUNCE_WINDOW_MS);
        Duration::from_millis(ms)
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
