//! Farrier's own configuration file handling.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Farrier's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FarrierConfig {
    /// Override for the Claude Code root directory (normally `~/.claude`).
    #[serde(default)]
    pub claude_dir: Option<PathBuf>,

    /// Default output directory for scaffolded plugins.
    /// Used when neither `--output` nor the spec's `outputPath` is given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl FarrierConfig {
    /// Load configuration from the default location.
    pub fn load() -> crate::error::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> crate::error::Result<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Get the configuration directory path.
    ///
    /// Respects the `FARRIER_CONFIG_DIR` environment variable for testing.
    pub fn config_dir() -> crate::error::Result<PathBuf> {
        if let Ok(dir) = std::env::var("FARRIER_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("farrier"))
            .ok_or_else(|| {
                crate::error::Error::NoConfigFound("no platform config directory".to_string())
            })
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> crate::error::Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::error::Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
