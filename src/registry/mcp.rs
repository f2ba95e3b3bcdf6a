//! MCP server aggregation across installed plugins.

use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

use super::{McpServerConfig, ResolvedPlugin};

#[derive(Deserialize)]
struct RawMcpEntry {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    env: HashMap<String, String>,
    #[serde(default)]
    cwd: Option<String>,
    #[serde(rename = "type", default)]
    server_type: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    headers: HashMap<String, String>,
}

/// Collect every MCP server declared by the given plugins' `.mcp.json` files.
/// Malformed files and entries are skipped.
pub fn read_mcp_servers(plugins: &[ResolvedPlugin]) -> Vec<McpServerConfig> {
    let mut servers = Vec::new();

    for plugin in plugins {
        let mcp_path = plugin.install_path.join(".mcp.json");
        let Ok(raw) = fs::read_to_string(&mcp_path) else {
            continue;
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
            continue;
        };

        for (server_name, entry) in normalize_mcp_json(&value) {
            servers.push(McpServerConfig {
                server_name,
                source_plugin: plugin.registry_key.clone(),
                source_plugin_name: plugin.name.clone(),
                command: entry.command,
                args: entry.args,
                env: entry.env,
                cwd: entry.cwd,
                server_type: entry.server_type,
                url: entry.url,
                headers: entry.headers,
            });
        }
    }

    servers
}

/// Accept both `{"mcpServers": {...}}` wrappers and bare server maps.
fn normalize_mcp_json(value: &serde_json::Value) -> Vec<(String, RawMcpEntry)> {
    let root = match value.get("mcpServers") {
        Some(wrapped) if wrapped.is_object() => wrapped,
        _ => value,
    };

    let Some(obj) = root.as_object() else {
        return Vec::new();
    };

    obj.iter()
        .filter_map(|(name, entry)| {
            let parsed = serde_json::from_value::<RawMcpEntry>(entry.clone()).ok()?;
            Some((name.clone(), parsed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SkillSource;

    fn fake_plugin(install_path: &std::path::Path) -> ResolvedPlugin {
        ResolvedPlugin {
            registry_key: "test@local".to_string(),
            name: "test".to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            scope: "user".to_string(),
            install_path: install_path.to_path_buf(),
            keywords: None,
            has_mcp_config: true,
            has_skills: false,
        }
    }

    #[test]
    fn reads_wrapper_format() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(".mcp.json"),
            r#"{"mcpServers": {
                "filesystem": {"command": "npx", "args": ["-y", "@anthropic/mcp-filesystem"]},
                "web": {"type": "http", "url": "https://example.com/mcp"}
            }}"#,
        )
        .unwrap();

        let servers = read_mcp_servers(&[fake_plugin(temp.path())]);
        assert_eq!(servers.len(), 2);
        let fs_server = servers.iter().find(|s| s.server_name == "filesystem").unwrap();
        assert_eq!(fs_server.transport(), "stdio");
        assert_eq!(fs_server.source_plugin_name, "test");
        let web = servers.iter().find(|s| s.server_name == "web").unwrap();
        assert_eq!(web.transport(), "http");
    }

    #[test]
    fn reads_bare_map_format() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(".mcp.json"),
            r#"{"solo": {"command": "node", "args": ["server.js"]}}"#,
        )
        .unwrap();

        let servers = read_mcp_servers(&[fake_plugin(temp.path())]);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].server_name, "solo");
        assert_eq!(servers[0].command.as_deref(), Some("node"));
    }

    #[test]
    fn malformed_json_yields_nothing() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(".mcp.json"), "not valid json").unwrap();
        assert!(read_mcp_servers(&[fake_plugin(temp.path())]).is_empty());
    }

    #[test]
    fn missing_file_yields_nothing() {
        let temp = tempfile::tempdir().unwrap();
        assert!(read_mcp_servers(&[fake_plugin(temp.path())]).is_empty());
    }

    #[test]
    fn skill_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SkillSource::Plugin).unwrap(),
            "\"plugin\""
        );
    }
}
