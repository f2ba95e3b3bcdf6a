//! Agent definition generator.

use super::GeneratedFile;
use super::yaml::{format_string_array, yaml_field};
use crate::spec::AgentComponent;

/// Render one agent as `agents/<name>.md`.
///
/// Fixed field order: name, description, model, color, then tools when
/// non-empty. The body is the agent's system prompt.
pub fn generate_agent(agent: &AgentComponent) -> GeneratedFile {
    let mut lines = vec!["---".to_string()];
    yaml_field(&mut lines, "name", &agent.name);
    yaml_field(&mut lines, "description", &agent.description);
    lines.push(format!("model: {}", agent.model.as_str()));
    lines.push(format!("color: {}", agent.color.as_str()));

    if let Some(tools) = &agent.tools {
        if !tools.is_empty() {
            lines.push(format!("tools: {}", format_string_array(tools)));
        }
    }

    lines.push("---".to_string());

    GeneratedFile {
        relative_path: format!("agents/{}.md", agent.name),
        content: format!("{}\n\n{}\n", lines.join("\n"), agent.system_prompt),
    }
}

/// Render all agents of a spec.
pub fn generate_agents(agents: &[AgentComponent]) -> Vec<GeneratedFile> {
    agents.iter().map(generate_agent).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{AgentColor, AgentModel};

    fn agent() -> AgentComponent {
        AgentComponent {
            name: "security-reviewer".to_string(),
            description: "Use this agent when reviewing security-sensitive code".to_string(),
            model: AgentModel::Inherit,
            color: AgentColor::Red,
            tools: None,
            system_prompt: "You are a security reviewer.".to_string(),
        }
    }

    #[test]
    fn renders_fixed_field_order() {
        let file = generate_agent(&agent());
        assert_eq!(file.relative_path, "agents/security-reviewer.md");
        assert_eq!(
            file.content,
            "---\n\
             name: security-reviewer\n\
             description: Use this agent when reviewing security-sensitive code\n\
             model: inherit\n\
             color: red\n\
             ---\n\n\
             You are a security reviewer.\n"
        );
    }

    #[test]
    fn tools_render_as_quoted_flow_sequence() {
        let mut a = agent();
        a.tools = Some(vec!["Read".to_string(), "Grep".to_string()]);
        let file = generate_agent(&a);
        assert!(file.content.contains("tools: [\"Read\", \"Grep\"]"));
    }

    #[test]
    fn multiline_description_uses_block_scalar() {
        let mut a = agent();
        a.description = "Use this agent when...\n<example>here</example>".to_string();
        let file = generate_agent(&a);
        assert!(file.content.contains(
            "description: |-\n  Use this agent when...\n  <example>here</example>\n"
        ));
        // The emitted document must still be valid frontmatter.
        let fm_end = file.content[3..].find("---").unwrap();
        let yaml = &file.content[3..3 + fm_end];
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            parsed["description"].as_str().unwrap(),
            "Use this agent when...\n<example>here</example>"
        );
    }
}
