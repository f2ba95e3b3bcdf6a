//! Plugin manifest generator.

use super::GeneratedFile;
use crate::spec::PluginSpec;

/// Relative path of the manifest within the plugin.
pub const MANIFEST_PATH: &str = ".claude-plugin/plugin.json";

/// Render `.claude-plugin/plugin.json`, pointing at whichever sub-components
/// are present. Key order is fixed: name, description, version, author, then
/// the component pointers.
pub fn generate_manifest(spec: &PluginSpec) -> GeneratedFile {
    let mut manifest = serde_json::Map::new();
    manifest.insert("name".to_string(), spec.name.clone().into());
    manifest.insert("description".to_string(), spec.description.clone().into());
    manifest.insert("version".to_string(), "1.0.0".into());

    if let Some(author) = &spec.author {
        manifest.insert(
            "author".to_string(),
            serde_json::to_value(author).expect("author serialization should not fail"),
        );
    }

    if !spec.components.skills.is_empty() {
        manifest.insert("skills".to_string(), "./skills/".into());
    }

    if !spec.components.commands.is_empty() {
        manifest.insert("commands".to_string(), "./commands/".into());
    }

    if spec.components.hooks.is_some() {
        manifest.insert("hooks".to_string(), "./hooks/hooks.json".into());
    }

    if spec.components.mcp.is_some() {
        manifest.insert("mcpServers".to_string(), "./.mcp.json".into());
    }

    GeneratedFile {
        relative_path: MANIFEST_PATH.to_string(),
        content: format!(
            "{}\n",
            serde_json::to_string_pretty(&serde_json::Value::Object(manifest))
                .expect("manifest serialization should not fail")
        ),
    }
}
