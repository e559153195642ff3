//! Application configuration: defaults, TOML file, environment overrides.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Result, WaylogError};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage key the workout snapshot list is saved under
    pub storage_key: String,

    /// Zoom level for centering the map on a position
    pub map_zoom: u8,

    /// Padding in screen pixels when fitting the overview bounds
    pub fit_padding: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "workouts".to_string(),
            map_zoom: 13,
            fit_padding: 70,
        }
    }
}

/// Optional values as they appear in a waylog.toml file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    storage_key: Option<String>,
    map_zoom: Option<u8>,
    fit_padding: Option<u32>,
}

impl AppConfig {
    /// Overlay values from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| WaylogError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| WaylogError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(storage_key) = file_config.storage_key {
            self.storage_key = storage_key;
        }

        if let Some(map_zoom) = file_config.map_zoom {
            self.map_zoom = map_zoom;
        }

        if let Some(fit_padding) = file_config.fit_padding {
            self.fit_padding = fit_padding;
        }

        Ok(self)
    }

    /// Overlay `WAYLOG_*` environment variables.
    ///
    /// Unparseable values are logged and skipped rather than failing startup.
    pub fn load_from_env(mut self) -> Self {
        if let Ok(storage_key) = env::var("WAYLOG_STORAGE_KEY") {
            if storage_key.is_empty() {
                tracing::warn!("Ignoring empty WAYLOG_STORAGE_KEY");
            } else {
                self.storage_key = storage_key;
            }
        }

        if let Ok(raw) = env::var("WAYLOG_MAP_ZOOM") {
            match raw.parse::<u8>() {
                Ok(map_zoom) => self.map_zoom = map_zoom,
                Err(_) => tracing::warn!(
                    "Invalid WAYLOG_MAP_ZOOM value '{}': expected an integer zoom level",
                    raw
                ),
            }
        }

        if let Ok(raw) = env::var("WAYLOG_FIT_PADDING") {
            match raw.parse::<u32>() {
                Ok(fit_padding) => self.fit_padding = fit_padding,
                Err(_) => tracing::warn!(
                    "Invalid WAYLOG_FIT_PADDING value '{}': expected pixels",
                    raw
                ),
            }
        }

        self
    }
}
