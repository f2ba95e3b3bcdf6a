//! Boundary validation of a deserialized plugin spec.
//!
//! Runs once, before the conflict check and generation. The generators assume
//! every invariant enforced here. Conflict checking against installed state is
//! a separate concern, see `scaffold::conflict`.

use thiserror::Error;

use super::name::{InvalidName, validate_kebab_name};
use super::{HookEntry, HookKind, ParameterKind, PluginSpec};

/// Spec-level validation failures.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid plugin name \"{name}\": {reason}")]
    InvalidPluginName { name: String, reason: InvalidName },

    #[error("invalid {kind} name \"{name}\": {reason}")]
    InvalidComponentName {
        kind: &'static str,
        name: String,
        reason: InvalidName,
    },

    /// Two components of the same kind within one spec share a name.
    #[error("duplicate {kind} name in spec: \"{name}\"")]
    DuplicateComponentName { kind: &'static str, name: String },

    #[error("MCP component must declare at least one tool")]
    NoTools,

    #[error("enum parameter \"{0}\" declares no values")]
    EmptyEnum(String),

    #[error("hook entry under \"{event}\" has type \"command\" but no command text")]
    MissingHookCommand { event: &'static str },

    #[error("hook entry under \"{event}\" has type \"prompt\" but no prompt text")]
    MissingHookPrompt { event: &'static str },
}

/// Validate a spec after deserialization.
pub fn validate(spec: &PluginSpec) -> Result<(), SpecError> {
    validate_kebab_name(&spec.name).map_err(|reason| SpecError::InvalidPluginName {
        name: spec.name.clone(),
        reason,
    })?;

    if let Some(mcp) = &spec.components.mcp {
        if mcp.tools.is_empty() {
            return Err(SpecError::NoTools);
        }
        for tool in &mcp.tools {
            for param in &tool.parameters {
                if let ParameterKind::Enum { enum_values } = &param.kind {
                    if enum_values.is_empty() {
                        return Err(SpecError::EmptyEnum(param.name.clone()));
                    }
                }
            }
        }
    }

    check_names("skill", spec.components.skills.iter().map(|s| s.name.as_str()))?;
    check_names(
        "command",
        spec.components.commands.iter().map(|c| c.name.as_str()),
    )?;
    check_names("agent", spec.components.agents.iter().map(|a| a.name.as_str()))?;

    if let Some(hooks) = &spec.components.hooks {
        let events: [(&'static str, &[HookEntry]); 9] = [
            ("sessionStart", &hooks.session_start),
            ("sessionEnd", &hooks.session_end),
            ("preToolUse", &hooks.pre_tool_use),
            ("postToolUse", &hooks.post_tool_use),
            ("stop", &hooks.stop),
            ("subagentStop", &hooks.subagent_stop),
            ("userPromptSubmit", &hooks.user_prompt_submit),
            ("preCompact", &hooks.pre_compact),
            ("notification", &hooks.notification),
        ];
        for (event, entries) in events {
            for entry in entries {
                match entry.kind {
                    HookKind::Command if entry.command.is_none() => {
                        return Err(SpecError::MissingHookCommand { event });
                    }
                    HookKind::Prompt if entry.prompt.is_none() => {
                        return Err(SpecError::MissingHookPrompt { event });
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Validate kebab-case and in-spec uniqueness for one component kind.
fn check_names<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), SpecError> {
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        validate_kebab_name(name).map_err(|reason| SpecError::InvalidComponentName {
            kind,
            name: name.to_string(),
            reason,
        })?;
        if seen.contains(&name) {
            return Err(SpecError::DuplicateComponentName {
                kind,
                name: name.to_string(),
            });
        }
        seen.push(name);
    }
    Ok(())
}
