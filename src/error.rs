//! Error types for the farrier CLI.

#![allow(dead_code)]

use thiserror::Error;

/// Result type alias using farrier's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in farrier.
#[derive(Error, Debug)]
pub enum Error {
    /// No configuration file found at expected location.
    #[error("no config found: {0}")]
    NoConfigFound(String),

    /// Failed to read or write configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Plugin spec file could not be parsed.
    #[error("invalid plugin spec: {0}")]
    Spec(String),

    /// No output directory given via --output, the spec, or config.
    #[error(
        "no output directory: pass --output, set outputPath in the spec, or set output_dir in config"
    )]
    NoOutputDir,

    /// MCP server with given name is not configured by any installed plugin.
    #[error("MCP server not found: {0}\nUse `farrier mcps` to see available servers")]
    ServerNotFound(String),

    /// Skill with given name is not available.
    #[error("skill not found: {0}\nUse `farrier skills` to see available skills")]
    SkillNotFound(String),

    /// Unknown configuration setting.
    #[error("unknown setting: {0}\nValid options: claude_dir, output_dir")]
    UnknownSetting(String),

    /// Invalid configuration value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Scaffold pipeline failure (conflicts or write errors).
    #[error(transparent)]
    Scaffold(#[from] crate::scaffold::ScaffoldError),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
