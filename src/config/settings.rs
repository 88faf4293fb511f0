//! Configuration settings for quickentry.
//!
//! Settings are loaded from `~/.quickentry/config.yaml`. Besides output
//! preferences the file carries the context and project catalogs that
//! `#` and `+` tokens resolve against.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::core::Entity;
use crate::error::QuickEntryError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Contexts available to `#` tokens.
    pub contexts: Vec<EntityConfig>,
    /// Projects available to `+` tokens.
    pub projects: Vec<EntityConfig>,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to terminal output for the rest of the process.
    pub fn apply(self) {
        match self {
            Self::Auto => {},
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// A context or project entry in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityConfig {
    pub id: String,
    pub name: String,
    /// Tie-break order for fuzzy matching, ascending.
    #[serde(default)]
    pub sort_order: i64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

/// Entities in match order: ascending `sort_order`, file order among equals.
fn ordered(entries: &[EntityConfig]) -> Vec<Entity> {
    let mut sorted: Vec<&EntityConfig> = entries.iter().collect();
    sorted.sort_by_key(|e| e.sort_order);
    sorted
        .into_iter()
        .map(|e| Entity::new(e.id.clone(), e.name.clone()))
        .collect()
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, QuickEntryError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            QuickEntryError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            QuickEntryError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Contexts in the order `#` tokens are matched against them.
    #[must_use]
    pub fn context_entities(&self) -> Vec<Entity> {
        ordered(&self.contexts)
    }

    /// Projects in the order `+` tokens are matched against them.
    #[must_use]
    pub fn project_entities(&self) -> Vec<Entity> {
        ordered(&self.projects)
    }
}
