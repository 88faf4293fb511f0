//! Configuration management for quickentry.
//!
//! This module handles loading and saving configuration from `~/.quickentry/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, EntityConfig, GeneralConfig};
