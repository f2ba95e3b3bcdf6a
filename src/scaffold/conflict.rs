//! Conflict detection against installed-plugin state.
//!
//! Runs before any file is generated. All checks execute; each failing check
//! appends one entry. An empty result means generation may proceed.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::registry::{McpServerConfig, ResolvedPlugin, SkillInfo, SkillSource};
use crate::spec::PluginSpec;

/// What kind of collision a conflict entry reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    Plugin,
    McpServer,
    Skill,
    OutputPath,
}

impl ConflictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::McpServer => "mcp-server",
            Self::Skill => "skill",
            Self::OutputPath => "output-path",
        }
    }
}

/// One detected naming collision.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictEntry {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub name: String,
    pub detail: String,
}

impl fmt::Display for ConflictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.detail)
    }
}

/// Check a spec against installed state and the target output directory.
///
/// `plugin_dir` is the directory the plugin would be written to
/// (output path + plugin name).
pub fn check_conflicts(
    spec: &PluginSpec,
    plugins: &[ResolvedPlugin],
    servers: &[McpServerConfig],
    skills: &[SkillInfo],
    plugin_dir: &Path,
) -> Vec<ConflictEntry> {
    let mut conflicts = Vec::new();

    if let Some(existing) = plugins.iter().find(|p| p.name == spec.name) {
        conflicts.push(ConflictEntry {
            kind: ConflictKind::Plugin,
            name: spec.name.clone(),
            detail: format!(
                "Plugin \"{}\" already installed at {}",
                spec.name,
                existing.install_path.display()
            ),
        });
    }

    if let Some(mcp) = &spec.components.mcp {
        if let Some(existing) = servers.iter().find(|s| s.server_name == mcp.server_name) {
            conflicts.push(ConflictEntry {
                kind: ConflictKind::McpServer,
                name: mcp.server_name.clone(),
                detail: format!(
                    "MCP server \"{}\" already exists in plugin \"{}\"",
                    mcp.server_name, existing.source_plugin_name
                ),
            });
        }
    }

    for skill in &spec.components.skills {
        if let Some(existing) = skills.iter().find(|s| s.name == skill.name) {
            let source = match existing.source {
                SkillSource::Plugin => format!(
                    "plugin \"{}\"",
                    existing.source_plugin_name.as_deref().unwrap_or("unknown")
                ),
                SkillSource::User => "user skills".to_string(),
            };
            conflicts.push(ConflictEntry {
                kind: ConflictKind::Skill,
                name: skill.name.clone(),
                detail: format!(
                    "Skill \"{}\" already exists in {} at {}",
                    skill.name,
                    source,
                    existing.file_path.display()
                ),
            });
        }
    }

    if plugin_dir.exists() {
        conflicts.push(ConflictEntry {
            kind: ConflictKind::OutputPath,
            name: plugin_dir.display().to_string(),
            detail: format!(
                "Output directory \"{}\" already exists",
                plugin_dir.display()
            ),
        });
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn spec(json: &str) -> PluginSpec {
        serde_json::from_str(json).unwrap()
    }

    fn installed(name: &str) -> ResolvedPlugin {
        ResolvedPlugin {
            registry_key: format!("{name}@local"),
            name: name.to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            scope: "user".to_string(),
            install_path: PathBuf::from(format!("/plugins/{name}")),
            keywords: None,
            has_mcp_config: false,
            has_skills: false,
        }
    }

    fn server(name: &str, plugin: &str) -> McpServerConfig {
        McpServerConfig {
            server_name: name.to_string(),
            source_plugin: format!("{plugin}@local"),
            source_plugin_name: plugin.to_string(),
            command: Some("node".to_string()),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
            server_type: None,
            url: None,
            headers: HashMap::new(),
        }
    }

    fn user_skill(name: &str) -> SkillInfo {
        SkillInfo {
            name: name.to_string(),
            description: String::new(),
            source: SkillSource::User,
            source_plugin: None,
            source_plugin_name: None,
            file_path: PathBuf::from(format!("/skills/{name}/SKILL.md")),
            directory_name: name.to_string(),
        }
    }

    #[test]
    fn clean_spec_has_no_conflicts() {
        let spec = spec(r#"{"name": "fresh", "description": "d"}"#);
        let conflicts = check_conflicts(
            &spec,
            &[installed("other")],
            &[],
            &[],
            Path::new("/nonexistent/out/fresh"),
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn detects_plugin_name_collision() {
        let spec = spec(r#"{"name": "foo", "description": "d"}"#);
        let conflicts = check_conflicts(
            &spec,
            &[installed("foo")],
            &[],
            &[],
            Path::new("/nonexistent/out/foo"),
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Plugin);
        assert!(conflicts[0].detail.contains("/plugins/foo"));
    }

    #[test]
    fn detects_mcp_server_collision() {
        let spec = spec(
            r#"{"name": "p", "description": "d", "components": {
                "mcp": {"serverName": "weather", "tools": [{"name": "t", "description": "d"}]}
            }}"#,
        );
        let conflicts = check_conflicts(
            &spec,
            &[],
            &[server("weather", "other-plugin")],
            &[],
            Path::new("/nonexistent/out/p"),
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::McpServer);
        assert!(conflicts[0].detail.contains("other-plugin"));
    }

    #[test]
    fn detects_skill_collision_per_skill() {
        let spec = spec(
            r#"{"name": "p", "description": "d", "components": {"skills": [
                {"name": "taken", "description": "d", "content": "c"},
                {"name": "free", "description": "d", "content": "c"}
            ]}}"#,
        );
        let conflicts = check_conflicts(
            &spec,
            &[],
            &[],
            &[user_skill("taken")],
            Path::new("/nonexistent/out/p"),
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Skill);
        assert_eq!(conflicts[0].name, "taken");
        assert!(conflicts[0].detail.contains("user skills"));
    }

    #[test]
    fn detects_existing_output_directory() {
        let temp = tempfile::tempdir().unwrap();
        let spec = spec(r#"{"name": "p", "description": "d"}"#);
        let conflicts = check_conflicts(&spec, &[], &[], &[], temp.path());
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::OutputPath);
    }

    #[test]
    fn all_checks_run_without_short_circuit() {
        let temp = tempfile::tempdir().unwrap();
        let spec = spec(
            r#"{"name": "foo", "description": "d", "components": {
                "mcp": {"serverName": "weather", "tools": [{"name": "t", "description": "d"}]},
                "skills": [{"name": "taken", "description": "d", "content": "c"}]
            }}"#,
        );
        let conflicts = check_conflicts(
            &spec,
            &[installed("foo")],
            &[server("weather", "other")],
            &[user_skill("taken")],
            temp.path(),
        );
        let kinds: Vec<ConflictKind> = conflicts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                ConflictKind::Plugin,
                ConflictKind::McpServer,
                ConflictKind::Skill,
                ConflictKind::OutputPath
            ]
        );
    }

    #[test]
    fn conflict_kind_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ConflictKind::McpServer).unwrap(),
            "\"mcp-server\""
        );
        assert_eq!(
            serde_json::to_string(&ConflictKind::OutputPath).unwrap(),
            "\"output-path\""
        );
    }
}
