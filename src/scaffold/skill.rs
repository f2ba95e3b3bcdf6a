//! Skill file generator.

use super::GeneratedFile;
use super::yaml::yaml_field;
use crate::spec::SkillComponent;

/// Render one skill as `skills/<name>/SKILL.md`.
pub fn generate_skill(skill: &SkillComponent) -> GeneratedFile {
    let mut lines = vec!["---".to_string()];
    yaml_field(&mut lines, "name", &skill.name);
    yaml_field(&mut lines, "description", &skill.description);
    yaml_field(&mut lines, "version", &skill.version);
    lines.push("---".to_string());

    GeneratedFile {
        relative_path: format!("skills/{}/SKILL.md", skill.name),
        content: format!("{}\n\n{}\n", lines.join("\n"), skill.content),
    }
}

/// Render all skills of a spec.
pub fn generate_skills(skills: &[SkillComponent]) -> Vec<GeneratedFile> {
    skills.iter().map(generate_skill).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, description: &str) -> SkillComponent {
        SkillComponent {
            name: name.to_string(),
            description: description.to_string(),
            version: "0.1.0".to_string(),
            content: "# Usage\n\nDo the thing.".to_string(),
        }
    }

    #[test]
    fn renders_frontmatter_and_body() {
        let file = generate_skill(&skill("code-review", "Reviews code"));
        assert_eq!(file.relative_path, "skills/code-review/SKILL.md");
        assert_eq!(
            file.content,
            "---\nname: code-review\ndescription: Reviews code\nversion: 0.1.0\n---\n\n# Usage\n\nDo the thing.\n"
        );
    }

    #[test]
    fn escapes_description_with_colon() {
        let file = generate_skill(&skill("s", "Use when: reviewing"));
        assert!(file.content.contains("description: \"Use when: reviewing\""));
    }

    #[test]
    fn generates_one_file_per_skill() {
        let files = generate_skills(&[skill("a", "x"), skill("b", "y")]);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].relative_path, "skills/a/SKILL.md");
        assert_eq!(files[1].relative_path, "skills/b/SKILL.md");
    }
}
