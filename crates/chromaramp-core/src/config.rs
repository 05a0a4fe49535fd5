//! Palette configuration loaded from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hex::HexColor;
use crate::shades::ShadeOptions;

/// Largest accepted `steps_per_side`.
pub const MAX_STEPS_PER_SIDE: u8 = 8;

/// Default fallback color (Tailwind blue-500).
pub const DEFAULT_FALLBACK: &str = "#3b82f6";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Shade ramp layout.
    pub shades: ShadeOptions,
    /// Color used when input fails to normalize.
    pub fallback: HexColor,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            shades: ShadeOptions::default(),
            fallback: default_fallback(),
        }
    }
}

fn default_fallback() -> HexColor {
    DEFAULT_FALLBACK
        .parse()
        .unwrap_or_else(|_| HexColor::black())
}

impl PaletteConfig {
    /// Default config file location.
    ///
    /// On Linux: `~/.config/chromaramp/config.json`
    /// On macOS: `~/Library/Application Support/chromaramp/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("chromaramp").join("config.json"))
    }

    /// Load and validate a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&json).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check shade options are within supported bounds.
    pub fn validate(&self) -> ConfigResult<()> {
        let ShadeOptions {
            steps_per_side,
            step_percent,
        } = self.shades;

        if !(1..=MAX_STEPS_PER_SIDE).contains(&steps_per_side) {
            return Err(ConfigError::Invalid(format!(
                "steps_per_side must be between 1 and {}, got {}",
                MAX_STEPS_PER_SIDE, steps_per_side
            )));
        }
        if !(1..=100).contains(&step_percent) {
            return Err(ConfigError::Invalid(format!(
                "step_percent must be between 1 and 100, got {}",
                step_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert_eq!(config.shades.steps_per_side, 3);
        assert_eq!(config.shades.step_percent, 12);
        assert_eq!(config.fallback.as_str(), "#3b82f6");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "shades": { "step_percent": 8 }, "fallback": "F0A" }"#).unwrap();

        let config = PaletteConfig::load(&path).unwrap();
        assert_eq!(config.shades.steps_per_side, 3);
        assert_eq!(config.shades.step_percent, 8);
        assert_eq!(config.fallback.as_str(), "#ff00aa");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = PaletteConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_bad_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "fallback": "not-a-color" }"#).unwrap();

        let result = PaletteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_out_of_bounds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "shades": { "steps_per_side": 0 } }"#).unwrap();
        assert!(matches!(PaletteConfig::load(&path), Err(ConfigError::Invalid(_))));

        fs::write(&path, r#"{ "shades": { "step_percent": 101 } }"#).unwrap();
        assert!(matches!(PaletteConfig::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_or_default_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = PaletteConfig {
            shades: ShadeOptions {
                steps_per_side: 5,
                step_percent: 10,
            },
            ..PaletteConfig::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = PaletteConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }
}
