//! Configuration handling for the demo form

use crate::form::{FieldKey, FormOptions};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "formstate=info,formstate_demo=info";

/// User configuration for the demo
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    /// Re-run validators on every change
    pub update_on_change: Option<bool>,
    /// Validate empty, zero and unchecked values too
    pub validate_falsy: Option<bool>,
    /// tracing-subscriber filter directive
    pub log_filter: Option<String>,
}

impl DemoConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formstate", "formstate")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: DemoConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Apply the configured switches on top of `options`
    pub fn apply<K: FieldKey>(&self, mut options: FormOptions<K>) -> FormOptions<K> {
        if let Some(enabled) = self.update_on_change {
            options = options.update_on_change(enabled);
        }
        if let Some(enabled) = self.validate_falsy {
            options = options.validate_falsy(enabled);
        }
        options
    }
}
