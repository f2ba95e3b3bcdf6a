//! Slash-command file generator.

use super::GeneratedFile;
use super::yaml::{format_string_array, yaml_field};
use crate::spec::CommandComponent;

/// Render one command as `commands/<name>.md`.
///
/// Field order is fixed so repeated runs are diff-stable: description,
/// argument-hint, allowed-tools, model, disable-model-invocation.
pub fn generate_command(command: &CommandComponent) -> GeneratedFile {
    let mut lines = vec!["---".to_string()];
    yaml_field(&mut lines, "description", &command.description);

    if let Some(hint) = &command.argument_hint {
        yaml_field(&mut lines, "argument-hint", hint);
    }

    if let Some(tools) = &command.allowed_tools {
        if !tools.is_empty() {
            lines.push(format!("allowed-tools: {}", format_string_array(tools)));
        }
    }

    if let Some(model) = command.model {
        lines.push(format!("model: {}", model.as_str()));
    }

    if command.disable_model_invocation {
        lines.push("disable-model-invocation: true".to_string());
    }

    lines.push("---".to_string());

    GeneratedFile {
        relative_path: format!("commands/{}.md", command.name),
        content: format!("{}\n\n{}\n", lines.join("\n"), command.body),
    }
}

/// Render all commands of a spec.
pub fn generate_commands(commands: &[CommandComponent]) -> Vec<GeneratedFile> {
    commands.iter().map(generate_command).collect()
}
