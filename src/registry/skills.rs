//! Skill discovery across plugin-owned and user-owned directories.
//!
//! A skill is a `<dir>/SKILL.md` file under either a plugin's `skills/`
//! directory or the user's `~/.claude/skills/`.

use std::fs;
use std::path::Path;

use super::frontmatter::parse_skill_frontmatter;
use super::{ResolvedPlugin, SkillInfo, SkillSource};
use crate::paths;

/// Discover all skills, plugin-owned first, then user-owned.
pub fn read_all_skills(plugins: &[ResolvedPlugin]) -> Vec<SkillInfo> {
    let mut skills = Vec::new();

    for plugin in plugins {
        collect_skills(
            &plugin.install_path.join("skills"),
            SkillSource::Plugin,
            Some(plugin),
            &mut skills,
        );
    }

    if let Some(user_dir) = paths::user_skills_dir() {
        collect_skills(&user_dir, SkillSource::User, None, &mut skills);
    }

    skills
}

/// Read a skill file's full content.
pub fn skill_content(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

fn collect_skills(
    dir: &Path,
    source: SkillSource,
    plugin: Option<&ResolvedPlugin>,
    out: &mut Vec<SkillInfo>,
) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut dirs: Vec<_> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .collect();
    dirs.sort_by_key(|e| e.file_name());

    for entry in dirs {
        let directory_name = entry.file_name().to_string_lossy().into_owned();
        let skill_path = entry.path().join("SKILL.md");
        let Ok(content) = fs::read_to_string(&skill_path) else {
            continue;
        };

        let parsed = parse_skill_frontmatter(&content);
        out.push(SkillInfo {
            name: parsed.name.unwrap_or_else(|| directory_name.clone()),
            description: parsed.description.unwrap_or_default(),
            source,
            source_plugin: plugin.map(|p| p.registry_key.clone()),
            source_plugin_name: plugin.map(|p| p.name.clone()),
            file_path: skill_path,
            directory_name,
        });
    }
}
