//! Plugin specification data model.
//!
//! A [`PluginSpec`] is deserialized from the JSON file passed to
//! `farrier scaffold` and validated once by [`validate::validate`] before any
//! generation runs. Generators may assume a validated spec.

pub mod name;
pub mod validate;

use std::path::PathBuf;

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn default_skill_version() -> String {
    "0.1.0".to_string()
}

fn default_hook_timeout() -> u64 {
    60
}

/// Declarative description of the plugin to scaffold.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSpec {
    /// Plugin name (kebab-case).
    pub name: String,
    /// What this plugin does.
    pub description: String,
    /// Plugin author, carried verbatim into the manifest.
    #[serde(default)]
    pub author: Option<AuthorSpec>,
    /// Where to write the plugin. `--output` takes precedence.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Write files to disk (true) or return them as JSON (false).
    #[serde(default = "default_true")]
    pub write_to_disk: bool,
    /// Sub-components to generate. Each is independently optional.
    #[serde(default)]
    pub components: Components,
}

/// Plugin author metadata.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AuthorSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The optional sub-components of a plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub mcp: Option<McpComponent>,
    #[serde(default)]
    pub skills: Vec<SkillComponent>,
    #[serde(default)]
    pub commands: Vec<CommandComponent>,
    #[serde(default)]
    pub agents: Vec<AgentComponent>,
    pub hooks: Option<HooksComponent>,
}

/// MCP server to generate as a TypeScript project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpComponent {
    /// MCP server name.
    pub server_name: String,
    /// Tools the server exposes. Must be non-empty.
    pub tools: Vec<McpTool>,
    #[serde(default)]
    pub transport: Transport,
}

/// Transport the generated MCP server connects over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

/// One tool exposed by the generated MCP server.
#[derive(Debug, Clone, Deserialize)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ToolParameter>,
}

/// A typed input parameter of a generated tool.
///
/// Default values arrive as strings and are coerced per type when the zod
/// schema is rendered (numbers via numeric parse, booleans from "true"/"1").
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Parameter type, tagged by the `type` field of the spec JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Number,
    Boolean,
    Enum {
        #[serde(rename = "enumValues", default)]
        enum_values: Vec<String>,
    },
}

/// A skill rendered as `skills/<name>/SKILL.md`.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillComponent {
    /// Skill name (kebab-case).
    pub name: String,
    /// When and why to use this skill.
    pub description: String,
    /// Semantic version (MAJOR.MINOR.PATCH).
    #[serde(default = "default_skill_version")]
    pub version: String,
    /// Skill body content (markdown).
    pub content: String,
}

/// A slash command rendered as `commands/<name>.md`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandComponent {
    /// Command name (kebab-case).
    pub name: String,
    /// What the command does, shown in /help.
    pub description: String,
    /// Expected arguments hint, e.g. `<pr-number>`.
    #[serde(default)]
    pub argument_hint: Option<String>,
    /// Tools the command may use, e.g. `["Read", "Grep", "Bash"]`.
    #[serde(default)]
    pub allowed_tools: Option<Vec<String>>,
    /// Model override.
    #[serde(default)]
    pub model: Option<ModelChoice>,
    /// If true the command is template-only, no model invocation.
    #[serde(default)]
    pub disable_model_invocation: bool,
    /// Command instructions (markdown).
    pub body: String,
}

/// Model override for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    Sonnet,
    Opus,
    Haiku,
}

impl ModelChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sonnet => "sonnet",
            Self::Opus => "opus",
            Self::Haiku => "haiku",
        }
    }
}

/// An agent rendered as `agents/<name>.md`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentComponent {
    /// Agent name (kebab-case).
    pub name: String,
    /// When to invoke this agent.
    pub description: String,
    #[serde(default)]
    pub model: AgentModel,
    #[serde(default)]
    pub color: AgentColor,
    /// Available tools. Omit for full access.
    #[serde(default)]
    pub tools: Option<Vec<String>>,
    /// Agent system prompt (markdown).
    pub system_prompt: String,
}

/// Model choice for agents; `inherit` uses the parent conversation's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentModel {
    #[default]
    Inherit,
    Sonnet,
    Opus,
    Haiku,
}

impl AgentModel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Sonnet => "sonnet",
            Self::Opus => "opus",
            Self::Haiku => "haiku",
        }
    }
}

/// UI color for agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentColor {
    #[default]
    Blue,
    Cyan,
    Green,
    Yellow,
    Magenta,
    Red,
}

impl AgentColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Red => "red",
        }
    }
}

/// Lifecycle hooks, one optional entry list per event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HooksComponent {
    #[serde(default)]
    pub session_start: Vec<HookEntry>,
    #[serde(default)]
    pub session_end: Vec<HookEntry>,
    #[serde(default)]
    pub pre_tool_use: Vec<HookEntry>,
    #[serde(default)]
    pub post_tool_use: Vec<HookEntry>,
    #[serde(default)]
    pub stop: Vec<HookEntry>,
    #[serde(default)]
    pub subagent_stop: Vec<HookEntry>,
    #[serde(default)]
    pub user_prompt_submit: Vec<HookEntry>,
    #[serde(default)]
    pub pre_compact: Vec<HookEntry>,
    #[serde(default)]
    pub notification: Vec<HookEntry>,
}

/// One hook registration under a lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct HookEntry {
    /// Regex or pipe-separated tool names. Omit to match all.
    #[serde(default)]
    pub matcher: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: HookKind,
    /// Shell command, for `command`-kind hooks.
    #[serde(default)]
    pub command: Option<String>,
    /// Evaluation prompt, for `prompt`-kind hooks.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Timeout in seconds.
    #[serde(default = "default_hook_timeout")]
    pub timeout: u64,
    /// Run the hook asynchronously.
    #[serde(rename = "async", default)]
    pub run_async: Option<bool>,
}

/// Hook kind: a shell script or a model-evaluated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookKind {
    #[default]
    Command,
    Prompt,
}
