use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::RgbaColor;
use crate::i18n::FALLBACK_LANGUAGE;
use crate::rescale::CANVAS_RESCALE_DEBOUNCE;
use crate::tool::{CanvasTool, DEFAULT_BRUSH_SIZE};

/// Environment variable naming the JSON config file
pub const CONFIG_ENV_VAR: &str = "CANVAS_STUDIO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old files
pub struct StudioConfig {
    /// Language used until the user picks one
    pub default_language: String,
    pub initial_tool: CanvasTool,
    /// Clamped into the brush size range on use
    pub initial_brush_size: i64,
    /// Alpha is clamped into the brush opacity range on use
    pub initial_brush_color: RgbaColor,
    pub rescale_debounce_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_language: FALLBACK_LANGUAGE.to_owned(),
            initial_tool: CanvasTool::default(),
            initial_brush_size: DEFAULT_BRUSH_SIZE as i64,
            initial_brush_color: RgbaColor::default(),
            rescale_debounce_ms: CANVAS_RESCALE_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl StudioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from `$CANVAS_STUDIO_CONFIG`, falling back to defaults when the
    /// variable is unset or the file is unusable
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn rescale_debounce(&self) -> Duration {
        Duration::from_millis(self.rescale_debounce_ms)
    }
}
