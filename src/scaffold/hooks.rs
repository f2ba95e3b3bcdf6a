//! Lifecycle hook generator.
//!
//! Emits one consolidated `hooks/hooks.json` plus a stub shell script per
//! distinct command-kind hook. Event keys map through a static table from the
//! spec's camelCase names to the PascalCase event names Claude Code expects.

use serde::Serialize;

use super::GeneratedFile;
use crate::spec::{HookEntry, HookKind, HooksComponent};

const STUB_SCRIPT: &str = "#!/usr/bin/env bash\n\
set -euo pipefail\n\
\n\
# Hook receives JSON on stdin with session context\n\
# Output JSON to stdout for hook response\n\
# Exit 0 = success, Exit 2 = blocking error\n\
\n\
# TODO: Implement hook logic\n\
echo '{\"continue\": true}'\n";

#[derive(Serialize)]
struct HookFileEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    matcher: Option<String>,
    hooks: Vec<HookAction>,
}

#[derive(Serialize)]
struct HookAction {
    #[serde(rename = "type")]
    kind: HookKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    timeout: u64,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    run_async: Option<bool>,
}

/// Static camelCase-to-PascalCase event bijection, in emission order.
fn event_entries(hooks: &HooksComponent) -> [(&'static str, &[HookEntry]); 9] {
    [
        ("SessionStart", &hooks.session_start),
        ("SessionEnd", &hooks.session_end),
        ("PreToolUse", &hooks.pre_tool_use),
        ("PostToolUse", &hooks.post_tool_use),
        ("Stop", &hooks.stop),
        ("SubagentStop", &hooks.subagent_stop),
        ("UserPromptSubmit", &hooks.user_prompt_submit),
        ("PreCompact", &hooks.pre_compact),
        ("Notification", &hooks.notification),
    ]
}

/// Derive a filesystem-safe script file name from raw command text.
///
/// Commands already naming a `.sh`/`.py` file pass through unchanged; anything
/// else is sanitized to `[A-Za-z0-9-]` with hyphen runs collapsed and `.sh`
/// appended. The derivation is deterministic so hook entries sharing command
/// text share one script.
pub fn script_name(command: &str) -> String {
    if command.ends_with(".sh") || command.ends_with(".py") {
        return command.to_string();
    }

    let mut out = String::with_capacity(command.len() + 3);
    let mut last_hyphen = false;
    for c in command.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    out.push_str(".sh");
    out
}

fn build_entry(entry: &HookEntry) -> HookFileEntry {
    let (command, prompt) = match entry.kind {
        HookKind::Command => {
            let script = script_name(entry.command.as_deref().unwrap_or("hook"));
            (
                Some(format!("${{CLAUDE_PLUGIN_ROOT}}/hooks/{script}")),
                None,
            )
        }
        HookKind::Prompt => (None, Some(entry.prompt.clone().unwrap_or_default())),
    };

    HookFileEntry {
        matcher: entry.matcher.clone(),
        hooks: vec![HookAction {
            kind: entry.kind,
            command,
            prompt,
            timeout: entry.timeout,
            run_async: entry.run_async,
        }],
    }
}

/// Render `hooks/hooks.json` and the stub scripts for command hooks.
pub fn generate_hooks(hooks: &HooksComponent) -> Vec<GeneratedFile> {
    let mut events = serde_json::Map::new();
    let mut script_names: Vec<String> = Vec::new();

    for (event_name, entries) in event_entries(hooks) {
        if entries.is_empty() {
            continue;
        }

        let rendered: Vec<HookFileEntry> = entries.iter().map(build_entry).collect();
        events.insert(
            event_name.to_string(),
            serde_json::to_value(rendered).expect("hook serialization should not fail"),
        );

        for entry in entries {
            if entry.kind == HookKind::Command {
                if let Some(command) = &entry.command {
                    let name = script_name(command);
                    if !script_names.contains(&name) {
                        script_names.push(name);
                    }
                }
            }
        }
    }

    let document = serde_json::json!({ "hooks": events });
    let mut files = vec![GeneratedFile {
        relative_path: "hooks/hooks.json".to_string(),
        content: format!(
            "{}\n",
            serde_json::to_string_pretty(&document).expect("hook serialization should not fail")
        ),
    }];

    for name in script_names {
        files.push(GeneratedFile {
            relative_path: format!("hooks/{name}"),
            content: STUB_SCRIPT.to_string(),
        });
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_hook(command: &str) -> HookEntry {
        HookEntry {
            matcher: None,
            kind: HookKind::Command,
            command: Some(command.to_string()),
            prompt: None,
            timeout: 60,
            run_async: None,
        }
    }

    #[test]
    fn script_name_sanitizes_commands() {
        assert_eq!(script_name("npm run lint"), "npm-run-lint.sh");
        assert_eq!(script_name("echo 'hi!'"), "echo-hi-.sh");
    }

    #[test]
    fn script_name_passes_through_script_files() {
        assert_eq!(script_name("check.sh"), "check.sh");
        assert_eq!(script_name("validate.py"), "validate.py");
    }

    #[test]
    fn script_name_collapses_hyphen_runs() {
        assert_eq!(script_name("a  -  b"), "a-b.sh");
    }

    #[test]
    fn maps_events_to_pascal_case() {
        let hooks = HooksComponent {
            pre_tool_use: vec![HookEntry {
                matcher: Some("Bash".to_string()),
                ..command_hook("guard")
            }],
            session_start: vec![command_hook("setup")],
            ..Default::default()
        };

        let files = generate_hooks(&hooks);
        let json: serde_json::Value =
            serde_json::from_str(&files[0].content).unwrap();
        let events = json["hooks"].as_object().unwrap();
        assert!(events.contains_key("SessionStart"));
        assert!(events.contains_key("PreToolUse"));
        assert!(!events.contains_key("Stop"));

        let pre = &events["PreToolUse"][0];
        assert_eq!(pre["matcher"], "Bash");
        assert_eq!(pre["hooks"][0]["type"], "command");
        assert_eq!(
            pre["hooks"][0]["command"],
            "${CLAUDE_PLUGIN_ROOT}/hooks/guard.sh"
        );
        assert_eq!(pre["hooks"][0]["timeout"], 60);
    }

    #[test]
    fn prompt_hooks_carry_prompt_text() {
        let hooks = HooksComponent {
            stop: vec![HookEntry {
                matcher: None,
                kind: HookKind::Prompt,
                command: None,
                prompt: Some("Check whether the task is done".to_string()),
                timeout: 30,
                run_async: Some(true),
            }],
            ..Default::default()
        };

        let files = generate_hooks(&hooks);
        let json: serde_json::Value = serde_json::from_str(&files[0].content).unwrap();
        let action = &json["hooks"]["Stop"][0]["hooks"][0];
        assert_eq!(action["type"], "prompt");
        assert_eq!(action["prompt"], "Check whether the task is done");
        assert_eq!(action["async"], true);
        assert!(action.get("command").is_none());
        // Prompt hooks produce no stub scripts.
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn identical_commands_share_one_script() {
        let hooks = HooksComponent {
            session_start: vec![command_hook("npm run lint")],
            post_tool_use: vec![command_hook("npm run lint")],
            ..Default::default()
        };

        let files = generate_hooks(&hooks);
        let scripts: Vec<_> = files
            .iter()
            .filter(|f| f.relative_path != "hooks/hooks.json")
            .collect();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].relative_path, "hooks/npm-run-lint.sh");
        assert!(scripts[0].content.starts_with("#!/usr/bin/env bash"));
        assert!(scripts[0].content.contains("set -euo pipefail"));
        assert!(scripts[0].content.contains("{\"continue\": true}"));
    }
}
