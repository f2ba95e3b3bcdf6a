//! Tolerant SKILL.md front-matter parsing.

use serde::Deserialize;

/// Fields extracted from a skill file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSkill {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct Frontmatter {
    name: Option<String>,
    description: Option<String>,
}

/// Parse the YAML front matter of a skill file.
///
/// Files without a front-matter block fall back to the first markdown heading
/// or non-empty paragraph line as the description; the name is left unset so
/// the caller can substitute the directory name.
pub fn parse_skill_frontmatter(content: &str) -> ParsedSkill {
    let trimmed = content.trim_start();

    if let Some(rest) = trimmed.strip_prefix("---") {
        if let Some(end) = rest.find("---") {
            let yaml = &rest[..end];
            if let Ok(fm) = serde_yaml::from_str::<Frontmatter>(yaml) {
                return ParsedSkill {
                    name: fm.name,
                    description: fm.description,
                };
            }
        }
    }

    // No usable frontmatter, derive a description from the body.
    let description = content.lines().find_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.strip_prefix('#') {
            Some(heading) => Some(heading.trim_start_matches('#').trim().to_string()),
            None => Some(line.to_string()),
        }
    });

    ParsedSkill {
        name: None,
        description,
    }
}
