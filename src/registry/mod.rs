//! Read-only views over the installed-plugin state.
//!
//! Everything here degrades silently: a missing or malformed registry file,
//! plugin manifest, or skill directory is treated as absent data, never as an
//! error. Partial installation state is expected to be common, so the read
//! path must stay resilient against it.

pub mod frontmatter;
pub mod mcp;
pub mod plugins;
pub mod skills;

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// An installed plugin, resolved from the registry plus its own manifest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlugin {
    /// Key in the installation registry, e.g. `weather@marketplace`.
    pub registry_key: String,
    /// Name from the plugin manifest, falling back to the registry key stem.
    pub name: String,
    pub version: String,
    pub description: String,
    pub scope: String,
    pub install_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Whether the plugin ships a `.mcp.json`.
    pub has_mcp_config: bool,
    /// Whether the plugin ships a non-empty `skills/` directory.
    pub has_skills: bool,
}

/// One MCP server entry aggregated from an installed plugin's `.mcp.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McpServerConfig {
    pub server_name: String,
    pub source_plugin: String,
    pub source_plugin_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl McpServerConfig {
    /// Transport as advertised by the config shape.
    pub fn transport(&self) -> &'static str {
        if self.command.is_some() { "stdio" } else { "http" }
    }
}

/// Where a skill comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    Plugin,
    User,
}

/// A discoverable skill, plugin-owned or user-owned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    pub name: String,
    pub description: String,
    pub source: SkillSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_plugin_name: Option<String>,
    pub file_path: PathBuf,
    pub directory_name: String,
}
