//! Configuration file handling
//!
//! The config lives at `~/.config/typecycle/config.toml` (or wherever
//! `TYPECYCLE_CONFIG` points). Every section and field is optional;
//! anything missing falls back to its default.

mod error;
mod migrate;

pub use error::ConfigError;
pub use migrate::{migrate_config, MigrateResult};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;
use crate::typewriter::TypewriterOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TYPECYCLE_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Typing, deleting and pause timings
    pub typewriter: TypewriterOptions,
    /// What is shown around the typed text
    pub display: DisplayConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Static text shown before the typed phrase
    pub prefix: String,
    /// Phrases to cycle, in order
    pub phrases: Vec<String>,
    /// Caret glyph appended after the typed text
    pub caret: String,
    /// Full caret blink period (ms); 0 keeps it always visible
    pub caret_blink_ms: u64,
    /// Color theme
    pub theme: ThemeName,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prefix: "I am a".to_string(),
            phrases: vec![
                "Full-Stack Web Developer".to_string(),
                "Web App & Dashboard Builder".to_string(),
                "CMS & Admin Panel Specialist".to_string(),
            ],
            caret: "|".to_string(),
            caret_blink_ms: 1060,
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Default config file location.
    ///
    /// Honors `TYPECYCLE_CONFIG`, then the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("typecycle").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config TOML.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Check the config can drive a typewriter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        Ok(())
    }
}
