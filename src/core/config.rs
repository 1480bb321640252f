use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::format::Format;

/// User-tunable settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Format used when `--format` is not given (e.g. "base64")
    #[serde(default)]
    pub default_format: Option<String>,
}

/// Configuration loaded from TOML.
///
/// Layers are merged in order, later ones overriding earlier ones:
/// 1. Built-in defaults (`defaults.toml` in the crate)
/// 2. `~/.config/bin2text/config.toml`
/// 3. `./bin2text.toml`
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    ///
    /// The file must parse and name a known format, so a bad layer is
    /// rejected on its own rather than after merging.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.default_format()?;
        Ok(config)
    }

    /// Path of the per-user configuration file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bin2text").join("config.toml"))
    }

    /// Load configuration with user overrides from standard locations.
    ///
    /// A user or local file that fails to parse is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let local = PathBuf::from("bin2text.toml");
        let candidates = Self::user_config_path().into_iter().chain(Some(local));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => config.merge(overrides),
                Err(e) => {
                    eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one; settings it defines win.
    pub fn merge(&mut self, other: Config) {
        if other.settings.default_format.is_some() {
            self.settings.default_format = other.settings.default_format;
        }
    }

    /// The configured default format, or base64 when none is set.
    pub fn default_format(&self) -> Result<Format, Box<dyn std::error::Error>> {
        match &self.settings.default_format {
            Some(name) => Ok(name.parse::<Format>()?),
            None => Ok(Format::Base64),
        }
    }
}
