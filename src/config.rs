//! Configuration file handling
//!
//! Settings live in `<config dir>/termfolio/config.toml`. Every field has a
//! default, so a partial (or missing) file loads fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::{Pacing, SessionOptions, DEFAULT_PROMPT};

/// Errors found while validating a loaded config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("animation.char_delay_min_ms ({min}) must be below char_delay_max_ms ({max})")]
    InvalidCharDelay { min: u64, max: u64 },

    #[error("Unknown theme '{0}' (expected one of: hacker, classic, ocean)")]
    UnknownTheme(String),

    #[error("terminal.prompt must not be empty")]
    EmptyPrompt,
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub animation: AnimationConfig,
    pub ui: UiConfig,
}

/// Prompt and window chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt label shown before the input line
    pub prompt: String,
    /// Title shown in the window bar
    pub title: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            title: "navya@terminal: ~".to_string(),
        }
    }
}

/// Typewriter reveal timing, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// When false, output appears at once
    pub enabled: bool,
    pub char_delay_min_ms: u64,
    pub char_delay_max_ms: u64,
    pub line_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_delay_min_ms: 10,
            char_delay_max_ms: 30,
            line_delay_ms: 100,
        }
    }
}

impl AnimationConfig {
    /// Reveal pacing for these settings.
    pub fn pacing(&self) -> Pacing {
        if !self.enabled {
            return Pacing::instant();
        }
        Pacing {
            char_delay_min: Duration::from_millis(self.char_delay_min_ms),
            char_delay_max: Duration::from_millis(self.char_delay_max_ms),
            line_delay: Duration::from_millis(self.line_delay_ms),
        }
    }
}

/// Look and feel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: hacker, classic or ocean
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "hacker".to_string(),
        }
    }
}

impl Config {
    /// Load from the default config path, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write to the default config path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Path of the config file: `<config dir>/termfolio/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("termfolio").join("config.toml"))
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.prompt.trim().is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        let anim = &self.animation;
        if anim.char_delay_min_ms >= anim.char_delay_max_ms {
            return Err(ConfigError::InvalidCharDelay {
                min: anim.char_delay_min_ms,
                max: anim.char_delay_max_ms,
            });
        }
        if crate::theme::Theme::by_name(&self.ui.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.ui.theme.clone()));
        }
        Ok(())
    }

    /// Options for a terminal session built from this config.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: self.terminal.prompt.clone(),
            pacing: self.animation.pacing(),
            ..SessionOptions::default()
        }
    }
}
