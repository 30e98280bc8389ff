// src/infrastructure/config.rs
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::BODY_PREVIEW_CHARS;

/// TOML configuration, read from `<config dir>/jotter/config.toml` when
/// present. Every field has a default so a missing or partial file is fine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    /// Notes directory override. Empty means the platform document directory.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Characters of body text shown per entry in the list view.
    #[serde(default = "default_preview")]
    pub preview: usize,
}

fn default_folder() -> String {
    String::new()
}
fn default_preview() -> usize {
    BODY_PREVIEW_CHARS
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            preview: default_preview(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the user's config file, or defaults when none exists.
    pub fn load_default() -> Result<Self> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        let path = config_dir.join("jotter").join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
