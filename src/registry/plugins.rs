//! Installed-plugin registry reader.
//!
//! The registry lives at `~/.claude/plugins/installed_plugins.json` and maps
//! registry keys to a list of installed versions, first entry active.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::ResolvedPlugin;
use crate::paths;

/// Relative path of a plugin's own manifest within its install directory.
pub const PLUGIN_MANIFEST_PATH: &str = ".claude-plugin/plugin.json";

#[derive(Deserialize)]
struct Registry {
    #[serde(default)]
    plugins: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RegistryEntry {
    #[serde(rename = "installPath")]
    install_path: std::path::PathBuf,
    #[serde(default)]
    version: String,
    #[serde(default)]
    scope: String,
}

#[derive(Deserialize, Default)]
struct PluginManifest {
    name: Option<String>,
    description: Option<String>,
    keywords: Option<Vec<String>>,
}

/// Read all installed plugins, resolving registry entries against each
/// plugin's own manifest. Returns an empty list when the registry is missing
/// or malformed; individual malformed entries are skipped.
pub fn read_installed_plugins() -> Vec<ResolvedPlugin> {
    let Some(registry_path) = paths::plugins_registry_path() else {
        return Vec::new();
    };

    let Ok(raw) = fs::read_to_string(&registry_path) else {
        return Vec::new();
    };

    let Ok(registry) = serde_json::from_str::<Registry>(&raw) else {
        return Vec::new();
    };

    let mut plugins = Vec::new();
    for (registry_key, value) in registry.plugins {
        // First entry is the active version.
        let Ok(entries) = serde_json::from_value::<Vec<RegistryEntry>>(value) else {
            continue;
        };
        let Some(entry) = entries.into_iter().next() else {
            continue;
        };

        plugins.push(resolve_plugin(registry_key, entry));
    }

    plugins
}

fn resolve_plugin(registry_key: String, entry: RegistryEntry) -> ResolvedPlugin {
    let fallback_name = registry_key
        .split('@')
        .next()
        .unwrap_or(&registry_key)
        .to_string();

    let manifest = read_manifest(&entry.install_path);

    let has_mcp_config = entry.install_path.join(".mcp.json").exists();
    let has_skills = dir_has_subdirectories(&entry.install_path.join("skills"));

    ResolvedPlugin {
        name: manifest.name.unwrap_or(fallback_name),
        description: manifest.description.unwrap_or_default(),
        keywords: manifest.keywords,
        registry_key,
        version: entry.version,
        scope: entry.scope,
        install_path: entry.install_path,
        has_mcp_config,
        has_skills,
    }
}

fn read_manifest(install_path: &Path) -> PluginManifest {
    fs::read_to_string(install_path.join(PLUGIN_MANIFEST_PATH))
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn dir_has_subdirectories(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .any(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn resolve_falls_back_to_registry_key_stem() {
        let entry = RegistryEntry {
            install_path: PathBuf::from("/nonexistent/install"),
            version: "1.2.0".to_string(),
            scope: "user".to_string(),
        };
        let plugin = resolve_plugin("weather@marketplace".to_string(), entry);
        assert_eq!(plugin.name, "weather");
        assert_eq!(plugin.registry_key, "weather@marketplace");
        assert!(!plugin.has_mcp_config);
        assert!(!plugin.has_skills);
    }

    #[test]
    fn resolve_prefers_manifest_metadata() {
        let temp = tempfile::tempdir().unwrap();
        let install = temp.path().join("weather");
        std::fs::create_dir_all(install.join(".claude-plugin")).unwrap();
        std::fs::write(
            install.join(PLUGIN_MANIFEST_PATH),
            r#"{"name": "weather-pro", "description": "Weather tools", "keywords": ["weather"]}"#,
        )
        .unwrap();
        std::fs::write(install.join(".mcp.json"), "{}").unwrap();
        std::fs::create_dir_all(install.join("skills/forecast")).unwrap();

        let entry = RegistryEntry {
            install_path: install,
            version: "1.0.0".to_string(),
            scope: "user".to_string(),
        };
        let plugin = resolve_plugin("weather@marketplace".to_string(), entry);
        assert_eq!(plugin.name, "weather-pro");
        assert_eq!(plugin.description, "Weather tools");
        assert!(plugin.has_mcp_config);
        assert!(plugin.has_skills);
    }

    #[test]
    fn malformed_manifest_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let install = temp.path().join("broken");
        std::fs::create_dir_all(install.join(".claude-plugin")).unwrap();
        std::fs::write(install.join(PLUGIN_MANIFEST_PATH), "not json").unwrap();

        let entry = RegistryEntry {
            install_path: install,
            version: String::new(),
            scope: String::new(),
        };
        let plugin = resolve_plugin("broken@local".to_string(), entry);
        assert_eq!(plugin.name, "broken");
        assert_eq!(plugin.description, "");
    }
}
