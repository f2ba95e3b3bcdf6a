//! Plugin generation pipeline.
//!
//! The orchestrator sequences conflict check, per-component generation,
//! manifest assembly, and the terminal write or dry-run serialization.
//! Generation itself is a pure function of the validated spec; conflicts
//! reject the operation before a single file exists.

pub mod agent;
pub mod command;
pub mod conflict;
pub mod hooks;
pub mod manifest;
pub mod mcp;
pub mod names;
pub mod skill;
pub mod writer;
pub mod yaml;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{self, McpServerConfig, ResolvedPlugin, SkillInfo};
use crate::spec::PluginSpec;
use conflict::ConflictEntry;

/// One rendered output file, path relative to the plugin root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub relative_path: String,
    pub content: String,
}

/// Why a scaffold operation failed.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Naming collisions against installed state. No files were produced.
    #[error("cannot scaffold: {} conflict(s) with installed state", .0.len())]
    Conflicts(Vec<ConflictEntry>),

    #[error("Failed to create directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    WriteFile(#[source] std::io::Error),
}

/// Immutable snapshot of installed-plugin state, taken before generation.
#[derive(Debug, Default)]
pub struct InstalledState {
    pub plugins: Vec<ResolvedPlugin>,
    pub servers: Vec<McpServerConfig>,
    pub skills: Vec<SkillInfo>,
}

impl InstalledState {
    /// Read the current installation state. Missing or malformed state
    /// degrades to empty collections.
    pub fn snapshot() -> Self {
        let plugins = registry::plugins::read_installed_plugins();
        let servers = registry::mcp::read_mcp_servers(&plugins);
        let skills = registry::skills::read_all_skills(&plugins);
        Self {
            plugins,
            servers,
            skills,
        }
    }
}

/// Per-component presence counts reported on success.
#[derive(Debug, Serialize)]
pub struct ComponentCounts {
    pub manifest: bool,
    pub mcp: bool,
    pub skills: usize,
    pub commands: usize,
    pub agents: usize,
    pub hooks: bool,
}

/// Structured success report for write mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldSummary {
    pub status: &'static str,
    pub plugin_path: PathBuf,
    pub generated_at: String,
    pub file_count: usize,
    pub files: Vec<String>,
    pub components: ComponentCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

/// Full file list returned in dry-run mode, without touching storage.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunReport {
    pub status: String,
    pub plugin_path: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// Result of a completed scaffold operation.
#[derive(Debug)]
pub enum ScaffoldOutcome {
    Written(ScaffoldSummary),
    DryRun(DryRunReport),
}

/// Render every file for the spec: manifest first, then each present
/// component in fixed order. Pure; relative paths are unique per run.
pub fn generate_files(spec: &PluginSpec) -> Vec<GeneratedFile> {
    let mut files = vec![manifest::generate_manifest(spec)];

    if let Some(mcp_component) = &spec.components.mcp {
        files.extend(mcp::generate_mcp_server(&spec.name, mcp_component));
    }

    files.extend(skill::generate_skills(&spec.components.skills));
    files.extend(command::generate_commands(&spec.components.commands));
    files.extend(agent::generate_agents(&spec.components.agents));

    if let Some(hooks_component) = &spec.components.hooks {
        files.extend(hooks::generate_hooks(hooks_component));
    }

    files
}

/// Run the full pipeline: conflict check, generation, then write or dry-run.
///
/// `write` persists under `output_dir/<plugin name>`; otherwise the file list
/// is returned for preview. A non-empty conflict list rejects the operation
/// with no side effects.
pub fn scaffold(
    spec: &PluginSpec,
    output_dir: &Path,
    write: bool,
    state: &InstalledState,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let plugin_dir = output_dir.join(&spec.name);

    let conflicts = conflict::check_conflicts(
        spec,
        &state.plugins,
        &state.servers,
        &state.skills,
        &plugin_dir,
    );
    if !conflicts.is_empty() {
        return Err(ScaffoldError::Conflicts(conflicts));
    }

    let files = generate_files(spec);

    if !write {
        return Ok(ScaffoldOutcome::DryRun(DryRunReport {
            status: "generated".to_string(),
            plugin_path: plugin_dir,
            files,
        }));
    }

    writer::write_files(&plugin_dir, &files)?;

    let next_steps = if spec.components.mcp.is_some() {
        vec![
            format!("cd {}", plugin_dir.display()),
            "npm install".to_string(),
            "npm run build".to_string(),
        ]
    } else {
        Vec::new()
    };

    Ok(ScaffoldOutcome::Written(ScaffoldSummary {
        status: "created",
        file_count: files.len(),
        files: files.into_iter().map(|f| f.relative_path).collect(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        components: ComponentCounts {
            manifest: true,
            mcp: spec.components.mcp.is_some(),
            skills: spec.components.skills.len(),
            commands: spec.components.commands.len(),
            agents: spec.components.agents.len(),
            hooks: spec.components.hooks.is_some(),
        },
        plugin_path: plugin_dir,
        next_steps,
    }))
}
