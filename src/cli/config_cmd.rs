//! CLI config command implementation.

use std::path::PathBuf;

use crate::config::FarrierConfig;
use crate::error::{Error, Result};

pub fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = FarrierConfig::load().unwrap_or_default();

    match key {
        "claude_dir" => config.claude_dir = Some(parse_path(value)?),
        "output_dir" => config.output_dir = Some(parse_path(value)?),
        _ => return Err(Error::UnknownSetting(key.to_string())),
    }
    config.save()?;

    println!("{key} = {value}");
    Ok(())
}

pub fn get_config(key: &str) -> Result<()> {
    let config = FarrierConfig::load()?;

    let value = match key {
        "claude_dir" => config.claude_dir,
        "output_dir" => config.output_dir,
        _ => return Err(Error::UnknownSetting(key.to_string())),
    };

    match value {
        Some(path) => println!("{}", path.display()),
        None => println!("(unset)"),
    }
    Ok(())
}

/// Expand a leading `~/` against the home directory.
fn parse_path(value: &str) -> Result<PathBuf> {
    if value.is_empty() {
        return Err(Error::InvalidValue("path must not be empty".to_string()));
    }

    if let Some(rest) = value.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(rest));
        }
    }
    Ok(PathBuf::from(value))
}
