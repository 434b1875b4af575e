//! User settings stored as JSON in the platform config directory.
//!
//! Every field has a default, so a partial (or missing) settings file is
//! valid. Command line flags override what is loaded here.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_SOURCE, SETTINGS_FILE_NAME, TOP_N_DEFAULT, TOP_N_MAX, TOP_N_MIN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid top-N range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },
}

/// Dashboard settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Source id (path or URL) of the dataset
    pub source: String,
    /// Column used for search and labels; the first column when unset
    pub key_column: Option<String>,
    /// Top-N used when a chart request gives none
    pub top_n: usize,
    /// Smallest allowed top-N
    pub top_n_min: usize,
    /// Largest allowed top-N
    pub top_n_max: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            key_column: None,
            top_n: TOP_N_DEFAULT,
            top_n_min: TOP_N_MIN,
            top_n_max: TOP_N_MAX,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.top_n_min == 0 || self.top_n_min > self.top_n_max {
            return Err(SettingsError::InvalidRange {
                min: self.top_n_min,
                max: self.top_n_max,
            });
        }
        Ok(())
    }

    /// Bring a requested top-N into the allowed range
    pub fn clamp_top_n(&self, n: usize) -> usize {
        n.max(self.top_n_min).min(self.top_n_max)
    }

    /// The default top-N, clamped
    pub fn default_top_n(&self) -> usize {
        self.clamp_top_n(self.top_n)
    }
}

/// Default location of the settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
